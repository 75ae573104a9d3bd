//! Listener registry with cancellable subscription handles.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::net::types::Session;

type Listener = Rc<dyn Fn(Option<&Session>)>;

/// Handle for a registered listener. Cancels on drop.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Unregister the listener now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Shared set of auth-state listeners. Clones share the same set.
#[derive(Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenerSet>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and return the handle that removes it.
    pub fn add(&self, listener: impl Fn(Option<&Session>) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let id = {
            let mut set = self.inner.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.entries.push((id, listener));
            id
        };
        let weak: Weak<RefCell<ListenerSet>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(set) = weak.upgrade() {
                set.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Call every registered listener with `session`.
    ///
    /// Listeners run against a snapshot, so they may subscribe or cancel
    /// while being notified.
    pub fn notify(&self, session: Option<&Session>) {
        let snapshot: Vec<Listener> =
            self.inner.borrow().entries.iter().map(|(_, listener)| Rc::clone(listener)).collect();
        for listener in snapshot {
            listener(session);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
