//! Session display controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built by the dashboard page with a live auth provider and document store,
//! and by tests with doubles. It subscribes once, then for every auth-state
//! notification either fills the name/email fields or navigates to the login
//! page.
//!
//! DESIGN
//! ======
//! Each notification bumps a generation counter. A profile lookup carries the
//! generation that started it, and its result is dropped if a newer
//! notification arrived meanwhile, so an old slow lookup can never overwrite
//! the name of a newer session. A logout notification also bumps the counter.
//!
//! The provider's listener holds a `Weak` back-reference; the controller owns
//! the subscription, so dropping the controller unregisters the listener.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;

use crate::error::{AuthError, StoreError};
use crate::net::types::{Document, Session};
use crate::session::LOGIN_LOCATION;
use crate::session::ports::{AuthProvider, DisplaySurface, DocumentStore, Navigator, Spawner};
use crate::session::reaction::{Generation, Reaction, react, resolve_name};
use crate::session::subscription::Subscription;

/// Page-side ports handed to the controller.
#[derive(Clone)]
pub struct PagePorts {
    pub display: Rc<dyn DisplaySurface>,
    pub navigator: Rc<dyn Navigator>,
    pub spawner: Rc<dyn Spawner>,
}

struct Inner<A, S> {
    auth: A,
    store: S,
    ports: PagePorts,
    generation: Cell<Generation>,
    subscription: RefCell<Option<Subscription>>,
}

/// Keeps the dashboard fields in sync with the auth state.
///
/// Cloning yields another handle to the same controller.
pub struct SessionDisplayController<A, S> {
    inner: Rc<Inner<A, S>>,
}

impl<A, S> Clone for SessionDisplayController<A, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A, S> SessionDisplayController<A, S>
where
    A: AuthProvider + 'static,
    S: DocumentStore + 'static,
{
    pub fn new(auth: A, store: S, ports: PagePorts) -> Self {
        Self {
            inner: Rc::new(Inner {
                auth,
                store,
                ports,
                generation: Cell::new(Generation::default()),
                subscription: RefCell::new(None),
            }),
        }
    }

    /// Subscribe to auth-state changes. Calling again replaces the previous
    /// subscription.
    pub fn initialize(&self) {
        let weak = Rc::downgrade(&self.inner);
        let subscription = self.inner.auth.on_auth_state_changed(move |session| {
            if let Some(inner) = weak.upgrade() {
                Self::handle(&inner, session);
            }
        });
        let previous = self.inner.subscription.replace(Some(subscription));
        drop(previous);
    }

    /// React to one auth-state notification.
    pub fn on_session_changed(&self, session: Option<&Session>) {
        Self::handle(&self.inner, session);
    }

    /// Sign out, then go to the login page.
    ///
    /// On failure the error is logged and the page is left as it is.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`] if sign-out failed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.inner.auth.sign_out().await {
            Ok(()) => {
                self.inner.ports.navigator.navigate(LOGIN_LOCATION);
                Ok(())
            }
            Err(err) => {
                log::error!("Logout error: {err}");
                Err(err)
            }
        }
    }

    /// The injected auth provider.
    pub fn auth(&self) -> &A {
        &self.inner.auth
    }

    /// Whether the controller currently holds an auth subscription.
    #[cfg(test)]
    pub(crate) fn is_subscribed(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    fn handle(inner: &Rc<Inner<A, S>>, session: Option<&Session>) {
        let generation = inner.generation.get().next();
        inner.generation.set(generation);

        match react(generation, session) {
            Reaction::Show { email, lookup } => {
                inner.ports.display.set_email(&email);
                let task_inner = Rc::clone(inner);
                let task = async move {
                    let result = task_inner.store.get(lookup.collection, &lookup.document_id).await;
                    task_inner.finish_lookup(lookup.generation, result);
                };
                inner.ports.spawner.spawn(task.boxed_local());
            }
            Reaction::Redirect { to } => {
                log::debug!("no session, redirecting to {to}");
                inner.ports.navigator.navigate(to);
            }
        }
    }
}

impl<A, S> Inner<A, S> {
    fn finish_lookup(&self, generation: Generation, result: Result<Option<Document>, StoreError>) {
        if generation != self.generation.get() {
            log::debug!("dropping profile lookup from superseded session change {generation:?}");
            return;
        }
        let resolution = resolve_name(result);
        if let Some(diagnostic) = &resolution.diagnostic {
            log::error!("{diagnostic}");
        }
        self.ports.display.set_name(&resolution.name);
    }
}
