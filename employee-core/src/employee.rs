use serde::{Deserialize, Serialize};

/// One entry of the remote employee list. Fields beyond these three are
/// ignored when decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
}

pub fn count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} Employee{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_count_label() {
        assert_eq!(count_label(0), "0 Employees");
        assert_eq!(count_label(1), "1 Employee");
        assert_eq!(count_label(2), "2 Employees");
        assert_eq!(count_label(10), "10 Employees");
    }

    #[test]
    fn decodes_list_payload_with_extra_fields() {
        let payload = serde_json::json!([{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        }]);
        let list: Vec<Employee> = serde_json::from_value(payload).expect("decode");
        assert_eq!(
            list,
            vec![Employee {
                id: 1,
                name: "Leanne Graham".into(),
                email: "Sincere@april.biz".into(),
            }]
        );
    }
}
