use super::*;
use crate::net::types::FieldValue;

fn session() -> Session {
    Session { uid: "u1".to_owned(), email: "ada@example.com".to_owned() }
}

fn document_with(field: Option<FieldValue>) -> Document {
    let mut doc = Document::default();
    if let Some(value) = field {
        doc.fields.insert("name".to_owned(), value);
    }
    doc
}

// =============================================================
// react
// =============================================================

#[test]
fn present_session_shows_email_and_looks_up_profile() {
    let generation = Generation::default().next();
    let reaction = react(generation, Some(&session()));
    assert_eq!(
        reaction,
        Reaction::Show {
            email: "ada@example.com".to_owned(),
            lookup: ProfileLookup {
                generation,
                collection: "students",
                document_id: "u1".to_owned(),
            },
        }
    );
}

#[test]
fn absent_session_redirects_to_login() {
    assert_eq!(react(Generation::default(), None), Reaction::Redirect { to: "login.html" });
}

#[test]
fn same_session_twice_yields_same_commands() {
    let generation = Generation::default();
    assert_eq!(react(generation, Some(&session())), react(generation, Some(&session())));
}

#[test]
fn generations_increase() {
    let first = Generation::default();
    let second = first.next();
    assert!(second > first);
    assert_ne!(second, second.next());
}

// =============================================================
// resolve_name
// =============================================================

#[test]
fn stored_name_is_shown() {
    let doc = document_with(Some(FieldValue::StringValue("Ada Lovelace".to_owned())));
    assert_eq!(
        resolve_name(Ok(Some(doc))),
        NameResolution { name: "Ada Lovelace".to_owned(), diagnostic: None }
    );
}

#[test]
fn missing_document_is_unknown() {
    assert_eq!(resolve_name(Ok(None)), NameResolution { name: "Unknown".to_owned(), diagnostic: None });
}

#[test]
fn missing_name_field_is_unknown() {
    let resolution = resolve_name(Ok(Some(document_with(None))));
    assert_eq!(resolution.name, "Unknown");
    assert!(resolution.diagnostic.is_none());
}

#[test]
fn empty_name_is_unknown() {
    let doc = document_with(Some(FieldValue::StringValue(String::new())));
    assert_eq!(resolve_name(Ok(Some(doc))).name, "Unknown");
}

#[test]
fn non_string_name_is_unknown() {
    let doc = document_with(Some(FieldValue::BooleanValue(true)));
    assert_eq!(resolve_name(Ok(Some(doc))).name, "Unknown");
}

#[test]
fn lookup_failure_is_unknown_with_diagnostic() {
    let resolution = resolve_name(Err(StoreError::Status(503)));
    assert_eq!(resolution.name, "Unknown");
    assert_eq!(
        resolution.diagnostic.as_deref(),
        Some("Error fetching name: document request returned status 503")
    );
}
