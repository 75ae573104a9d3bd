//! Dashboard display fields.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use leptos::prelude::*;

use crate::session::ports::DisplaySurface;

/// Text shown in the dashboard's `name` and `email` elements.
///
/// `None` renders as blank until the controller writes a value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl DisplayState {
    pub fn name_text(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    pub fn email_text(&self) -> String {
        self.email.clone().unwrap_or_default()
    }
}

impl DisplaySurface for RwSignal<DisplayState> {
    fn set_name(&self, name: &str) {
        self.update(|state| state.name = Some(name.to_owned()));
    }

    fn set_email(&self, email: &str) {
        self.update(|state| state.email = Some(email.to_owned()));
    }
}
