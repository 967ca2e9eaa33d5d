use crate::employee::Employee;
use crate::escape::escape_html;

/// Column classes of the wrapper each card is mounted in.
pub const CARD_COLUMN_CLASS: &str = "col-md-6 col-lg-4";

/// Inner markup of one employee card. Name and email are escaped; the id is
/// an integer and needs no escaping.
pub fn employee_card(employee: &Employee) -> String {
    format!(
        r#"<div class="employee-card"><span class="employee-id">#{id}</span><h3 class="employee-name">{name}</h3><div class="employee-email"><i class="fas fa-envelope"></i><span>{email}</span></div></div>"#,
        id = employee.id,
        name = escape_html(&employee.name),
        email = escape_html(&employee.email),
    )
}

/// Markup for every card, in collection order. The caller replaces the grid
/// contents wholesale with the result.
pub fn employee_cards(employees: &[Employee]) -> Vec<String> {
    employees.iter().map(employee_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, email: &str) -> Employee {
        Employee {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn card_shows_id_name_and_email() {
        let card = employee_card(&employee(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz"));
        assert!(card.contains(r#"<span class="employee-id">#7</span>"#));
        assert!(card.contains(r#"<h3 class="employee-name">Kurtis Weissnat</h3>"#));
        assert!(card.contains("<span>Telly.Hoeger@billy.biz</span>"));
    }

    #[test]
    fn card_escapes_injected_markup() {
        let card = employee_card(&employee(1, "<img src=x onerror=alert(1)>", "a&b@x.io"));
        assert!(!card.contains("<img"));
        assert!(card.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(card.contains("a&amp;b@x.io"));
    }

    #[test]
    fn one_card_per_employee() {
        let list = vec![
            employee(1, "a", "a@x.io"),
            employee(2, "b", "b@x.io"),
            employee(3, "c", "c@x.io"),
        ];
        let cards = employee_cards(&list);
        assert_eq!(cards.len(), 3);
        assert!(cards[2].contains("#3"));
        assert!(employee_cards(&[]).is_empty());
    }
}
