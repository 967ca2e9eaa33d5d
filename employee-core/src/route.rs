/// Fragment used when the URL carries none.
pub const DEFAULT_FRAGMENT: &str = "home";

/// Which section of the page is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Form,
    /// Fragment matched nothing; both sections stay hidden.
    Unknown,
}

impl View {
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment {
            "home" | "dashboard" => View::Dashboard,
            "employee-form" => View::Form,
            _ => View::Unknown,
        }
    }

    pub fn shows_dashboard(self) -> bool {
        self == View::Dashboard
    }

    pub fn shows_form(self) -> bool {
        self == View::Form
    }
}

/// The current fragment together with the view it selects. The raw fragment
/// is kept because navigation highlighting compares against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    fragment: String,
    view: View,
}

impl Route {
    /// Build from `location.hash`, with or without the leading `#`.
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let fragment = if fragment.is_empty() {
            DEFAULT_FRAGMENT
        } else {
            fragment
        };
        Self {
            fragment: fragment.to_string(),
            view: View::from_fragment(fragment),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Whether a navigation entry declaring `link_route` should be
    /// highlighted. `home` and `dashboard` name the same section.
    pub fn highlights(&self, link_route: &str) -> bool {
        link_route == self.fragment
            || (is_dashboard_alias(link_route) && is_dashboard_alias(&self.fragment))
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::from_hash(DEFAULT_FRAGMENT)
    }
}

fn is_dashboard_alias(route: &str) -> bool {
    matches!(route, "home" | "dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fragments_to_views() {
        assert_eq!(Route::from_hash("#home").view(), View::Dashboard);
        assert_eq!(Route::from_hash("#dashboard").view(), View::Dashboard);
        assert_eq!(Route::from_hash("#employee-form").view(), View::Form);
        assert_eq!(Route::from_hash("#reports").view(), View::Unknown);
    }

    #[test]
    fn missing_fragment_defaults_to_home() {
        for hash in ["", "#"] {
            let route = Route::from_hash(hash);
            assert_eq!(route.fragment(), "home");
            assert_eq!(route.view(), View::Dashboard);
        }
        assert_eq!(Route::default().fragment(), "home");
    }

    #[test]
    fn accepts_fragment_without_hash() {
        assert_eq!(Route::from_hash("employee-form").view(), View::Form);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Route::from_hash("#Home").view(), View::Unknown);
        assert_eq!(Route::from_hash("#employee-form/").view(), View::Unknown);
    }

    #[test]
    fn at_most_one_section_is_shown() {
        for hash in ["#home", "#dashboard", "#employee-form", "#nope"] {
            let view = Route::from_hash(hash).view();
            assert!(!(view.shows_dashboard() && view.shows_form()));
        }
        let unknown = View::Unknown;
        assert!(!unknown.shows_dashboard());
        assert!(!unknown.shows_form());
    }

    #[test]
    fn home_and_dashboard_highlight_each_other() {
        let on_dashboard = Route::from_hash("#dashboard");
        assert!(on_dashboard.highlights("home"));
        assert!(on_dashboard.highlights("dashboard"));
        assert!(!on_dashboard.highlights("employee-form"));

        let on_home = Route::from_hash("#home");
        assert!(on_home.highlights("dashboard"));

        let on_form = Route::from_hash("#employee-form");
        assert!(on_form.highlights("employee-form"));
        assert!(!on_form.highlights("home"));
    }

    #[test]
    fn unknown_fragment_highlights_only_its_own_link() {
        let route = Route::from_hash("#reports");
        assert!(route.highlights("reports"));
        assert!(!route.highlights("home"));
        assert!(!route.highlights("employee-form"));
    }
}
