//! Employee Dashboard
//!
//! Client-side rendered Leptos application compiled to WebAssembly. Lists
//! employees from a remote endpoint and offers a form that collects, but
//! never stores, new entries. Behaviour lives in `employee-core`; this crate
//! binds it to the DOM, the URL fragment, timers and `fetch`.

use employee_core::Config;
use leptos::*;

mod app;
mod bridge;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = Config::from_build_env();
    log::info!("employee dashboard reading from {}", config.employees_url);

    mount_to_body(move || view! { <app::App config=config /> });
}
