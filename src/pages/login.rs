//! Login page: email + password sign-in against Firebase Authentication.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Trim the email and require both fields. The password is kept verbatim.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match sign_in(&email_value, &password_value).await {
                Ok(()) => {
                    use crate::session::ports::Navigator as _;
                    crate::util::navigate::LocationNavigator.navigate(crate::session::DASHBOARD_LOCATION);
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Student Dashboard"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn sign_in(email: &str, password: &str) -> Result<(), String> {
    use crate::config::BackendConfig;
    use crate::error::AuthError;
    use crate::net::firebase_auth::{FirebaseAuth, describe_rejection};
    use crate::net::storage::BrowserStorage;

    let config = BackendConfig::embedded().map_err(|e| e.to_string())?;
    let auth = FirebaseAuth::new(&config, BrowserStorage);
    match auth.sign_in_with_password(email, password).await {
        Ok(_) => Ok(()),
        Err(AuthError::Rejected { message, .. }) => Err(describe_rejection(&message).to_owned()),
        Err(e) => Err(e.to_string()),
    }
}
