use std::time::Duration;

pub const DEFAULT_EMPLOYEES_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// How long an alert stays up, and how long its fade-out lasts before it is
/// removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertTiming {
    pub lifetime: Duration,
    pub fade: Duration,
}

impl Default for AlertTiming {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(5),
            fade: Duration::from_millis(300),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub employees_url: String,
    pub alerts: AlertTiming,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            employees_url: DEFAULT_EMPLOYEES_URL.into(),
            alerts: AlertTiming::default(),
        }
    }
}

impl Config {
    /// Read overrides baked in at compile time. A wasm bundle has no process
    /// environment, so `EMPLOYEES_URL` is taken from the build environment.
    pub fn from_build_env() -> Self {
        Self::with_url_override(option_env!("EMPLOYEES_URL"))
    }

    fn with_url_override(url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            config.employees_url = url.to_string();
        }
        config
    }
}
