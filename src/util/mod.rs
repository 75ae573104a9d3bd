//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys`/`js-sys` access from page and session
//! logic; non-hydrate builds get inert fallbacks.

pub mod clock;
pub mod navigate;
#[cfg(feature = "hydrate")]
pub mod spawn;
