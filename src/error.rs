//! Error types shared by the backend adapters and the session controller.
//!
//! ERROR HANDLING
//! ==============
//! Errors carry strings rather than source errors so they stay `Clone` and
//! comparable; the browser HTTP and storage errors are `JsValue`-backed and
//! only useful as text in the console anyway.

use thiserror::Error;

/// Failure reading or writing the browser key-value store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("storage unavailable: {0}")]
pub struct StorageError(pub String);

/// Failures from the authentication provider.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("auth request failed: {0}")]
    Transport(String),

    #[error("auth rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected auth response: {0}")]
    Decode(String),

    #[error("no stored session")]
    NoSession,

    #[error("auth backend not available outside the browser")]
    Unavailable,
}

/// Failures from the document store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no signed-in session to authorize the request")]
    Unauthenticated,

    #[error("document request failed: {0}")]
    Transport(String),

    #[error("document request returned status {0}")]
    Status(u16),

    #[error("unexpected document payload: {0}")]
    Decode(String),

    #[error("document store not available outside the browser")]
    Unavailable,
}
