//! Cloud Firestore document reads over the REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authorized with the
//! signed-in user's id token.
//! Elsewhere `get` still checks for a session, then returns
//! `StoreError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use crate::config::BackendConfig;
use crate::error::StoreError;
use crate::net::firebase_auth::IdTokenSource;
use crate::net::types::Document;
use crate::session::ports::DocumentStore;

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// REST URL of `collection/id` in the project's `(default)` database.
pub fn document_url(project_id: &str, collection: &str, id: &str) -> String {
    format!("{FIRESTORE_BASE}/projects/{project_id}/databases/(default)/documents/{collection}/{id}")
}

/// Firestore client reading documents on behalf of the signed-in user.
#[derive(Clone)]
pub struct Firestore<T> {
    project_id: String,
    tokens: T,
}

impl<T: IdTokenSource> Firestore<T> {
    pub fn new(config: &BackendConfig, tokens: T) -> Self {
        Self { project_id: config.project_id.clone(), tokens }
    }
}

impl<T: IdTokenSource> DocumentStore for Firestore<T> {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let token = self.tokens.id_token().ok_or(StoreError::Unauthenticated)?;
        let url = document_url(&self.project_id, collection, id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            match resp.status() {
                200 => resp
                    .json::<Document>()
                    .await
                    .map(Some)
                    .map_err(|e| StoreError::Decode(e.to_string())),
                404 => Ok(None),
                status => Err(StoreError::Status(status)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, url);
            Err(StoreError::Unavailable)
        }
    }
}
