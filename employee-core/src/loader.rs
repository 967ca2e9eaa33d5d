use crate::employee::{count_label, Employee};
use crate::route::View;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by the loader. Browser futures are not `Send`, so neither
/// is this.
pub trait HttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>>;
}

/// Fetches the employee list from one fixed URL.
pub struct EmployeeLoader<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> EmployeeLoader<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn load(&self) -> Result<Vec<Employee>, FetchError> {
        log::debug!("fetching employees from {}", self.url);
        let response = self.client.get(&self.url).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        let employees: Vec<Employee> =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        log::info!("loaded {} employees", employees.len());
        Ok(employees)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Holds the message shown to the user.
    Failed(String),
}

/// The one part of the dashboard visible at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Error,
    Grid,
}

/// Owner of the employee collection and of its load state. A load only
/// starts from `Idle`, so the list is requested at most once per page.
#[derive(Clone, Debug)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    state: LoadState,
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            state: LoadState::Idle,
        }
    }
}

impl EmployeeDirectory {
    /// Claim the load. Returns true exactly once per directory; the caller
    /// must then issue the request and hand its result to [`Self::finish`].
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::Idle {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    /// Claim the load only when `view` is the dashboard, which is the one
    /// place the list is shown.
    pub fn begin_load_for(&mut self, view: View) -> bool {
        view.shows_dashboard() && self.begin_load()
    }

    pub fn finish(&mut self, result: Result<Vec<Employee>, FetchError>) {
        match result {
            Ok(employees) => {
                self.employees = employees;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                self.state = LoadState::Failed(format!("Failed to load employee data. {err}"));
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn panel(&self) -> Panel {
        match self.state {
            LoadState::Idle | LoadState::Loading => Panel::Loading,
            LoadState::Failed(_) => Panel::Error,
            LoadState::Loaded => Panel::Grid,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn count_label(&self) -> String {
        count_label(self.employees.len())
    }
}
