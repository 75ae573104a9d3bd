//! Firebase Authentication over the Identity Toolkit / Secure Token REST APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page signs in through `sign_in_with_password`; the dashboard
//! observes the session through `AuthProvider`. Both share the session stored
//! under `SESSION_KEY`, so the session survives navigation between pages.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere the network calls return `AuthError::Unavailable`; storage-only
//! operations (`on_auth_state_changed`, `sign_out`) work everywhere.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_auth_test.rs"]
mod firebase_auth_test;

use std::rc::Rc;

use crate::config::BackendConfig;
use crate::error::AuthError;
use crate::net::storage::KeyValueStorage;
use crate::net::types::{Session, StoredSession};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{ApiErrorBody, RefreshResponse, SignInResponse};
use crate::session::ports::AuthProvider;
use crate::session::subscription::{Listeners, Subscription};

/// Storage key of the persisted session.
pub const SESSION_KEY: &str = "dashboard.session";

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint(api_key: &str) -> String {
    format!("https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key={api_key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_endpoint(api_key: &str) -> String {
    format!("https://securetoken.googleapis.com/v1/token?key={api_key}")
}

/// Absolute expiry for a token issued at `now_ms` that lives `expires_in`
/// seconds. An unparsable lifetime counts as already expired.
#[cfg(any(test, feature = "hydrate"))]
fn expires_at(now_ms: u64, expires_in: &str) -> u64 {
    expires_in
        .trim()
        .parse::<u64>()
        .map_or(now_ms, |secs| now_ms.saturating_add(secs.saturating_mul(1000)))
}

#[cfg(any(test, feature = "hydrate"))]
fn session_from_sign_in(resp: SignInResponse, now_ms: u64) -> StoredSession {
    StoredSession {
        expires_at_ms: expires_at(now_ms, &resp.expires_in),
        uid: resp.local_id,
        email: resp.email,
        id_token: resp.id_token,
        refresh_token: resp.refresh_token,
    }
}

/// Refresh responses carry no email; keep the one already stored.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_refresh(resp: RefreshResponse, previous: &StoredSession, now_ms: u64) -> StoredSession {
    StoredSession {
        expires_at_ms: expires_at(now_ms, &resp.expires_in),
        uid: resp.user_id,
        email: previous.email.clone(),
        id_token: resp.id_token,
        refresh_token: resp.refresh_token,
    }
}

/// Classify a non-2xx auth response.
///
/// Client errors (`INVALID_PASSWORD`, `TOKEN_EXPIRED`,
/// `INVALID_REFRESH_TOKEN`, `USER_DISABLED`, ...) mean the backend refused
/// the credentials and become [`AuthError::Rejected`]. Timeouts, throttling
/// and server errors are transient and become [`AuthError::Transport`].
/// The message comes from the Google API error envelope, or the raw body
/// when it is not one.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_status(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_owned());
    match status {
        400..=499 if status != 408 && status != 429 => AuthError::Rejected { status, message },
        _ => AuthError::Transport(format!("status {status}: {message}")),
    }
}

/// Human-readable text for the Identity Toolkit error codes a password
/// sign-in can produce.
pub fn describe_rejection(message: &str) -> &str {
    // Codes may carry a detail suffix: "TOO_MANY_ATTEMPTS_TRY_LATER : ...".
    let code = message.split_whitespace().next().unwrap_or(message);
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password."
        }
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        "INVALID_EMAIL" => "Enter a valid email address.",
        _ => message,
    }
}

/// Source of the bearer token for authorized backend calls.
pub trait IdTokenSource {
    fn id_token(&self) -> Option<String>;
}

struct AuthInner<K> {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    api_key: String,
    storage: K,
    listeners: Listeners,
}

/// Firebase Authentication client. Clones share storage and listeners.
pub struct FirebaseAuth<K> {
    inner: Rc<AuthInner<K>>,
}

impl<K> Clone for FirebaseAuth<K> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<K: KeyValueStorage> FirebaseAuth<K> {
    pub fn new(config: &BackendConfig, storage: K) -> Self {
        Self {
            inner: Rc::new(AuthInner {
                api_key: config.api_key.clone(),
                storage,
                listeners: Listeners::new(),
            }),
        }
    }

    /// The persisted session, if any.
    ///
    /// Unreadable storage reads as signed out. A stored value that does not
    /// parse is discarded.
    pub fn current_session(&self) -> Option<StoredSession> {
        let raw = match self.inner.storage.get_item(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("reading stored session failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding malformed stored session: {e}");
                if let Err(e) = self.inner.storage.remove_item(SESSION_KEY) {
                    log::warn!("clearing malformed stored session failed: {e}");
                }
                None
            }
        }
    }

    /// Sign in with email and password and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for bad credentials,
    /// [`AuthError::Transport`]/[`AuthError::Decode`] for network, throttling,
    /// server or payload problems, and [`AuthError::Storage`] if the session cannot be saved.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            });
            let resp = gloo_net::http::Request::post(&sign_in_endpoint(&self.inner.api_key))
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(failure_from_status(resp.status(), &body));
            }
            let body: SignInResponse = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            let stored = session_from_sign_in(body, crate::util::clock::now_ms());
            self.store_session(&stored)?;
            log::info!("signed in as {}", stored.uid);
            Ok(stored.session())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Exchange the stored refresh token for a new id token and notify
    /// listeners with the (same) user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoSession`] without a stored session, otherwise
    /// the same errors as [`Self::sign_in_with_password`].
    pub async fn refresh(&self) -> Result<Session, AuthError> {
        let previous = self.current_session().ok_or(AuthError::NoSession)?;
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "grant_type": "refresh_token",
                "refresh_token": previous.refresh_token,
            });
            let resp = gloo_net::http::Request::post(&refresh_endpoint(&self.inner.api_key))
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(failure_from_status(resp.status(), &body));
            }
            let body: RefreshResponse = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            let stored = session_from_refresh(body, &previous, crate::util::clock::now_ms());
            self.store_session(&stored)?;
            Ok(stored.session())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = previous;
            Err(AuthError::Unavailable)
        }
    }

    /// Refresh the stored session if its id token has expired at `now_ms`.
    ///
    /// A refresh the backend rejects (revoked or expired refresh token)
    /// clears the session. Transport failures keep it.
    ///
    /// # Errors
    ///
    /// Returns the refresh error, after clearing the session if it was
    /// rejected.
    pub async fn ensure_fresh(&self, now_ms: u64) -> Result<(), AuthError> {
        let Some(stored) = self.current_session() else {
            return Ok(());
        };
        if !stored.is_expired(now_ms) {
            return Ok(());
        }
        let result = self.refresh().await;
        self.settle_refresh(result)
    }

    /// Apply the outcome of a refresh: a rejection clears the stored session
    /// and notifies absence, anything else leaves storage alone.
    fn settle_refresh(&self, result: Result<Session, AuthError>) -> Result<(), AuthError> {
        match result {
            Ok(_) => Ok(()),
            Err(err @ AuthError::Rejected { .. }) => {
                log::warn!("stored session rejected on refresh, clearing: {err}");
                self.clear_session()?;
                Err(err)
            }
            Err(err) => {
                log::warn!("refresh failed, keeping stored session: {err}");
                Err(err)
            }
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn store_session(&self, stored: &StoredSession) -> Result<(), AuthError> {
        let raw = serde_json::to_string(stored).map_err(|e| AuthError::Decode(e.to_string()))?;
        self.inner.storage.set_item(SESSION_KEY, &raw)?;
        self.inner.listeners.notify(Some(&stored.session()));
        Ok(())
    }

    fn clear_session(&self) -> Result<(), AuthError> {
        self.inner.storage.remove_item(SESSION_KEY)?;
        self.inner.listeners.notify(None);
        Ok(())
    }
}

impl<K: KeyValueStorage> AuthProvider for FirebaseAuth<K> {
    fn on_auth_state_changed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + 'static,
    {
        let listener = Rc::new(listener);
        let registered = Rc::clone(&listener);
        let subscription = self.inner.listeners.add(move |session| registered(session));
        let current = self.current_session().map(|stored| stored.session());
        listener(current.as_ref());
        subscription
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.clear_session()?;
        log::info!("signed out");
        Ok(())
    }
}

impl<K: KeyValueStorage> IdTokenSource for FirebaseAuth<K> {
    fn id_token(&self) -> Option<String> {
        self.current_session().map(|stored| stored.id_token)
    }
}
