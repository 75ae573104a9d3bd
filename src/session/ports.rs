//! Port traits between the session controller and its environment.
//!
//! Everything runs on the single-threaded browser event loop, so none of
//! these traits require `Send`. The async traits are used through generics;
//! the synchronous ones are object-safe and passed as `Rc<dyn _>`.

#![allow(async_fn_in_trait)]

use futures::future::LocalBoxFuture;

use crate::error::{AuthError, StoreError};
use crate::net::types::{Document, Session};
use crate::session::subscription::Subscription;

/// Authentication provider reporting session changes.
pub trait AuthProvider {
    /// Register `listener` for auth-state changes.
    ///
    /// The listener is called once right away with the current state and
    /// again on every change. Dropping or cancelling the returned
    /// [`Subscription`] unregisters it.
    fn on_auth_state_changed<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + 'static;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the provider could not drop the session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Read access to a remote document database.
pub trait DocumentStore {
    /// Fetch `collection/id`. A missing document is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, authorization, or decoding
    /// failures.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;
}

/// The two text fields on the dashboard.
pub trait DisplaySurface {
    fn set_name(&self, name: &str);
    fn set_email(&self, email: &str);
}

/// Page navigation.
pub trait Navigator {
    fn navigate(&self, location: &str);
}

/// Runs a future on the local event loop.
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
