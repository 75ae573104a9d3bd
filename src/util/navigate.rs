//! Full-page navigation through `window.location`.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use crate::session::ports::Navigator;

/// Navigates by assigning `window.location.href`, resolving relative
/// locations against the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, location: &str) {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.location().set_href(location) {
                        log::error!("navigation to {location} failed: {e:?}");
                    }
                }
                None => log::error!("navigation to {location} failed: no window"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigation to {location} skipped outside the browser");
        }
    }
}
