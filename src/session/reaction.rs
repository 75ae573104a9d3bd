//! Pure decision logic for session changes and profile lookups.
//!
//! Nothing here touches the page or the network: the controller feeds in a
//! session or a lookup result and executes whatever comes back.

#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

use crate::error::StoreError;
use crate::net::types::{Document, Session};
use crate::session::{LOGIN_LOCATION, NAME_FIELD, PROFILE_COLLECTION, UNKNOWN_NAME};

/// Sequence number of a session-change event. Only the newest generation
/// may write the name field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Profile read requested by a [`Reaction::Show`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileLookup {
    pub generation: Generation,
    pub collection: &'static str,
    pub document_id: String,
}

/// What the page should do for one auth-state notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Write `email` now, then run `lookup` to fill in the name.
    Show { email: String, lookup: ProfileLookup },
    /// Leave the page without touching the fields.
    Redirect { to: &'static str },
}

/// Decide how to react to a session change tagged with `generation`.
pub fn react(generation: Generation, session: Option<&Session>) -> Reaction {
    match session {
        Some(session) => Reaction::Show {
            email: session.email.clone(),
            lookup: ProfileLookup {
                generation,
                collection: PROFILE_COLLECTION,
                document_id: session.uid.clone(),
            },
        },
        None => Reaction::Redirect { to: LOGIN_LOCATION },
    }
}

/// Name to display plus an optional console diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameResolution {
    pub name: String,
    pub diagnostic: Option<String>,
}

/// Turn a profile lookup result into the text for the name field.
///
/// A missing document, a missing or empty `name`, and a `name` stored as a
/// non-string all read as [`UNKNOWN_NAME`]. Failures do too, with a
/// diagnostic attached.
pub fn resolve_name(result: Result<Option<Document>, StoreError>) -> NameResolution {
    match result {
        Ok(document) => {
            let name = document
                .as_ref()
                .and_then(|doc| doc.string_field(NAME_FIELD))
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_NAME);
            NameResolution { name: name.to_owned(), diagnostic: None }
        }
        Err(err) => NameResolution {
            name: UNKNOWN_NAME.to_owned(),
            diagnostic: Some(format!("Error fetching name: {err}")),
        },
    }
}
