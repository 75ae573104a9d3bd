//! Wire-format DTOs for the Firebase REST boundary.
//!
//! DESIGN
//! ======
//! Firestore encodes every field as a single-key object naming its type
//! (`{"stringValue": "Ada"}`), which maps directly onto an externally tagged
//! serde enum. Identity Toolkit responses use camelCase while the Secure Token
//! endpoint uses snake_case; each gets its own response struct.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The signed-in user as seen by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider user id; also the profile document id.
    pub uid: String,
    /// Account email. Empty for accounts without one.
    pub email: String,
}

/// Session persisted in browser storage between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub uid: String,
    #[serde(default)]
    pub email: String,
    /// Short-lived bearer token for Firestore requests.
    pub id_token: String,
    /// Long-lived token exchanged for a fresh `id_token`.
    pub refresh_token: String,
    /// Expiry of `id_token` in milliseconds since the Unix epoch.
    pub expires_at_ms: u64,
}

impl StoredSession {
    /// The public part of the session handed to auth-state listeners.
    pub fn session(&self) -> Session {
        Session { uid: self.uid.clone(), email: self.email.clone() }
    }

    /// Whether the id token has expired at `now_ms`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// `accounts:signInWithPassword` success body.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds, sent as a decimal string.
    pub expires_in: String,
}

/// Secure Token `token` exchange success body.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub user_id: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

/// Google API error envelope: `{"error": {"code": 400, "message": "..."}}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

/// A Firestore document as returned by the REST `documents.get` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource path (`projects/p/databases/(default)/documents/c/id`).
    #[serde(default, rename = "name")]
    pub path: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl Document {
    /// The value of `key` if it is stored as a string.
    pub fn string_field(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FieldValue::StringValue(value)) => Some(value),
            _ => None,
        }
    }
}

/// One typed Firestore value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integers travel as decimal strings.
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}
