use crate::bridge::FetchClient;
use employee_core::render::{employee_cards, CARD_COLUMN_CLASS};
use employee_core::{
    Alert, Config, EmployeeDirectory, EmployeeLoader, FormFields, Notifier, Panel, Route, Severity,
    View,
};
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

const NAV_LINKS: [(&str, &str); 2] = [("home", "Dashboard"), ("employee-form", "Add Employee")];

const DESIGNATIONS: [&str; 6] = [
    "Software Engineer",
    "Senior Software Engineer",
    "Product Manager",
    "Designer",
    "QA Engineer",
    "HR Manager",
];

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let route = create_rw_signal(Route::default());
    let directory = create_rw_signal(EmployeeDirectory::default());
    let notifier = create_rw_signal(Notifier::default());
    let form = create_rw_signal(FormFields::default());

    let timing = config.alerts;
    let loader = Rc::new(EmployeeLoader::new(FetchClient, config.employees_url));

    let notify = move |message: String, severity: Severity| {
        let Some(id) = notifier.try_update(|n| n.show(message, severity)) else {
            return;
        };
        set_timeout(
            move || {
                if notifier.try_update(|n| n.fade(id)).unwrap_or(false) {
                    set_timeout(
                        move || {
                            notifier.update(|n| {
                                n.retire(id);
                            })
                        },
                        timing.fade,
                    );
                }
            },
            timing.lifetime,
        );
    };

    let handle_route = move || {
        let next = Route::from_hash(&current_hash());
        log::debug!("route #{}", next.fragment());
        let view = next.view();
        route.set(next);

        if directory.try_update(|d| d.begin_load_for(view)).unwrap_or(false) {
            let loader = Rc::clone(&loader);
            spawn_local(async move {
                let result = loader.load().await;
                if let Err(err) = &result {
                    log::error!("Error loading employees: {err}");
                }
                directory.update(|d| d.finish(result));
            });
        }
    };

    if current_hash().is_empty() {
        if let Err(err) = window().location().set_hash("home") {
            log::warn!("could not set default route: {err:?}");
        }
    }
    let on_hash_change = handle_route.clone();
    let _ = window_event_listener(ev::hashchange, move |_| on_hash_change());
    handle_route();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(FormFields::submit) {
            Ok(draft) => {
                log::info!("New Employee Data: {}", draft.to_json());
                notify(draft.success_message(), Severity::Success);
                form.update(FormFields::reset);
            }
            Err(err) => notify(err.to_string(), Severity::Warning),
        }
    };

    let showing = move |panel: Panel| directory.with(|d| d.panel() == panel);

    view! {
      <nav class="navbar navbar-expand navbar-dark bg-primary mb-4">
        <div class="container">
          <a class="navbar-brand" href="#home">
            <i class="fas fa-users me-2"></i>
            "Employee Dashboard"
          </a>
          <ul class="navbar-nav">
            {NAV_LINKS
              .iter()
              .map(|&(target, label)| view! {
                <li class="nav-item">
                  <a
                    class="nav-link"
                    class:active=move || route.with(|r| r.highlights(target))
                    href=format!("#{target}")
                    data-route=target
                  >
                    {label}
                  </a>
                </li>
              })
              .collect_view()}
          </ul>
        </div>
      </nav>

      <main class="container">
        <section id="dashboard-section" class:hidden=move || !route.with(|r| r.view().shows_dashboard())>
          <div class="d-flex justify-content-between align-items-center mb-4">
            <h2>"Employees"</h2>
            <span id="employee-count-text" class="badge bg-secondary">
              {move || directory.with(EmployeeDirectory::count_label)}
            </span>
          </div>

          <div id="loading-state" class="text-center py-5" class:hidden=move || !showing(Panel::Loading)>
            <div class="spinner-border text-primary" role="status"></div>
            <p class="mt-3">"Loading employees..."</p>
          </div>

          <div id="error-state" class="text-center py-5" class:hidden=move || !showing(Panel::Error)>
            <i class="fas fa-exclamation-circle fa-3x text-danger"></i>
            <p id="error-message" class="mt-3">
              {move || directory.with(|d| d.error_message().unwrap_or_default().to_string())}
            </p>
          </div>

          <div id="employee-grid" class="row g-4" class:hidden=move || !showing(Panel::Grid)>
            {move || directory.with(|d| {
              employee_cards(d.employees())
                .into_iter()
                .map(|card| view! { <div class=CARD_COLUMN_CLASS inner_html=card></div> })
                .collect_view()
            })}
          </div>
        </section>

        <section id="form-section" class:hidden=move || !route.with(|r| r.view().shows_form())>
          <h2 class="mb-4">"Add Employee"</h2>
          <form id="employee-form" on:submit=on_submit>
            <div class="mb-3">
              <label for="employee-name" class="form-label">"Name"</label>
              <input
                id="employee-name"
                class="form-control"
                type="text"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
              />
            </div>
            <div class="mb-3">
              <label for="employee-designation" class="form-label">"Designation"</label>
              <select
                id="employee-designation"
                class="form-select"
                prop:value=move || form.with(|f| f.designation.clone())
                on:change=move |ev| form.update(|f| f.designation = event_target_value(&ev))
              >
                <option value="">"Select a designation"</option>
                {DESIGNATIONS
                  .iter()
                  .map(|&designation| view! { <option value=designation>{designation}</option> })
                  .collect_view()}
              </select>
            </div>
            <div class="mb-3">
              <label for="employee-location" class="form-label">"Location"</label>
              <input
                id="employee-location"
                class="form-control"
                type="text"
                prop:value=move || form.with(|f| f.location.clone())
                on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
              />
            </div>
            <div class="mb-3">
              <label for="employee-salary" class="form-label">"Salary"</label>
              <input
                id="employee-salary"
                class="form-control"
                type="number"
                step="0.01"
                prop:value=move || form.with(|f| f.salary.clone())
                on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev))
              />
            </div>
            <button type="submit" class="btn btn-primary">
              <i class="fas fa-plus me-2"></i>
              "Add Employee"
            </button>
          </form>
        </section>

        <Show
          when=move || route.with(|r| r.view() == View::Unknown)
          fallback=|| ()
        >
          <section id="not-found-section" class="text-center py-5">
            <h2>"Page not found"</h2>
            <p>{move || route.with(|r| format!("Nothing lives at #{}.", r.fragment()))}</p>
            <a href="#home">"Back to the dashboard"</a>
          </section>
        </Show>
      </main>

      {move || notifier.with(|n| n.current().cloned()).map(|alert| {
        let class = alert.class();
        let icon = format!("fas fa-{} me-2", alert.severity.icon());
        let Alert { id, message, .. } = alert;
        view! {
          <div class=class role="alert">
            <i class=icon></i>
            {message}
            <button
              type="button"
              class="btn-close"
              aria-label="Close"
              on:click=move |_| notifier.update(|n| {
                n.retire(id);
              })
            ></button>
          </div>
        }
      })}
    }
}
