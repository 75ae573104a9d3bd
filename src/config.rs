//! Backend project configuration.
//!
//! DESIGN
//! ======
//! The config mirrors a Firebase web-app config object (camelCase keys) so
//! the JSON can be pasted straight from the Firebase console. Values are not
//! checked locally; a wrong key or project id surfaces as a REST error from
//! the backend on first use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config compiled into the browser bundle.
const EMBEDDED: &str = include_str!("../config/backend.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identifiers of the backend project, supplied once at page mount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    /// Web API key used by the Identity Toolkit and Secure Token endpoints.
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    /// Project whose `(default)` Firestore database holds profile documents.
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
}

impl BackendConfig {
    /// Parse a Firebase web config JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or a
    /// required key (`apiKey`, `projectId`) is missing.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the config embedded from `config/backend.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the embedded file is malformed.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED)
    }
}
