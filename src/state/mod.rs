//! Client-side page state.
//!
//! DESIGN
//! ======
//! State lives in Leptos signals owned by the page that renders it; the
//! session controller writes into them through the `DisplaySurface` port.

pub mod display;
