//! DOM-free behaviour of the employee dashboard.
//!
//! Everything the browser app does lives here behind small seams: the
//! network is an injected [`loader::HttpClient`], the URL fragment is a plain
//! string and timers are driven by the caller. The `employee-ui` crate binds
//! these pieces to Leptos signals.

pub mod alert;
pub mod config;
pub mod employee;
pub mod escape;
pub mod form;
pub mod loader;
pub mod render;
pub mod route;

pub use alert::{Alert, AlertId, AlertPhase, Notifier, Severity};
pub use config::{AlertTiming, Config};
pub use employee::{count_label, Employee};
pub use escape::escape_html;
pub use form::{parse_float, DraftSubmission, FormError, FormFields};
pub use loader::{
    EmployeeDirectory, EmployeeLoader, FetchError, HttpClient, HttpResponse, LoadState, Panel,
};
pub use route::{Route, View};
