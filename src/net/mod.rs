//! Backend adapters for Firebase Authentication and Cloud Firestore.
//!
//! SYSTEM CONTEXT
//! ==============
//! `firebase_auth` keeps the browser session and reports auth-state changes,
//! `firestore` reads profile documents, `storage` abstracts `localStorage`,
//! and `types` defines the wire schema shared by all three.

pub mod firebase_auth;
pub mod firestore;
pub mod storage;
pub mod types;
