//! Dashboard page showing the signed-in user's name and email.
//!
//! SYSTEM CONTEXT
//! ==============
//! On the server the page renders with blank fields. In the browser it
//! builds a `SessionDisplayController` over Firebase, refreshes an expired
//! stored session, then subscribes; from there the controller fills the
//! fields or sends the visitor to the login page.

use leptos::prelude::*;

use crate::state::display::DisplayState;

/// Dashboard page with the `name`/`email` fields and a logout button.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let display = RwSignal::new(DisplayState::default());

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(live::mount(display));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = controller.get_value() {
                leptos::task::spawn_local(async move {
                    // Failures are logged by the controller; the page stays put.
                    let _ = controller.logout().await;
                });
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button id="logout" class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <section class="dashboard-page__profile">
                <p>
                    "Name: "
                    <span id="name">{move || display.with(DisplayState::name_text)}</span>
                </p>
                <p>
                    "Email: "
                    <span id="email">{move || display.with(DisplayState::email_text)}</span>
                </p>
            </section>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod live {
    use std::rc::Rc;

    use leptos::prelude::*;

    use crate::config::BackendConfig;
    use crate::net::firebase_auth::FirebaseAuth;
    use crate::net::firestore::Firestore;
    use crate::net::storage::BrowserStorage;
    use crate::session::{PagePorts, SessionDisplayController};
    use crate::state::display::DisplayState;
    use crate::util::{clock, navigate::LocationNavigator, spawn::TaskSpawner};

    type LiveAuth = FirebaseAuth<BrowserStorage>;

    pub(super) type DashboardController = SessionDisplayController<LiveAuth, Firestore<LiveAuth>>;

    /// Build the controller and start it once any expired session has been
    /// refreshed. Returns `None` if the embedded config is unusable.
    pub(super) fn mount(display: RwSignal<DisplayState>) -> Option<DashboardController> {
        let config = match BackendConfig::embedded() {
            Ok(config) => config,
            Err(e) => {
                log::error!("dashboard disabled: {e}");
                return None;
            }
        };
        let auth = FirebaseAuth::new(&config, BrowserStorage);
        let store = Firestore::new(&config, auth.clone());
        let ports = PagePorts {
            display: Rc::new(display),
            navigator: Rc::new(LocationNavigator),
            spawner: Rc::new(TaskSpawner),
        };
        let controller = SessionDisplayController::new(auth, store, ports);

        let starter = controller.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = starter.auth().ensure_fresh(clock::now_ms()).await {
                log::warn!("session refresh failed: {e}");
            }
            starter.initialize();
        });
        Some(controller)
    }
}
