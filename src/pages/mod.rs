//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its signals and wires browser-only behavior behind the
//! `hydrate` feature; decision logic lives in `session`.

pub mod dashboard;
pub mod login;
