//! Session display: keep the dashboard's name/email fields in step with the
//! authentication state.
//!
//! ARCHITECTURE
//! ============
//! - `ports` declares what the controller needs from the outside world.
//! - `subscription` is the listener registry auth providers build on.
//! - `reaction` is the pure decision logic (session → commands).
//! - `controller` executes reactions against injected ports.

pub mod controller;
pub mod ports;
pub mod reaction;
pub mod subscription;

pub use controller::{PagePorts, SessionDisplayController};
pub use ports::{AuthProvider, DisplaySurface, DocumentStore, Navigator, Spawner};
pub use reaction::{Generation, NameResolution, ProfileLookup, Reaction};
pub use subscription::{Listeners, Subscription};

/// Where visitors without a session are sent.
pub const LOGIN_LOCATION: &str = "login.html";

/// Where a successful sign-in lands.
pub const DASHBOARD_LOCATION: &str = "dashboard.html";

/// Collection holding one profile document per user id.
pub const PROFILE_COLLECTION: &str = "students";

/// Profile field shown as the display name.
pub const NAME_FIELD: &str = "name";

/// Shown when the profile has no usable name or could not be read.
pub const UNKNOWN_NAME: &str = "Unknown";
