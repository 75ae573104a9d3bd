use super::*;

#[test]
fn from_json_reads_firebase_web_config_keys() {
    let config = BackendConfig::from_json(
        r#"{
            "apiKey": "key-1",
            "authDomain": "demo.firebaseapp.com",
            "projectId": "demo",
            "storageBucket": "demo.appspot.com",
            "messagingSenderId": "1234",
            "appId": "1:1234:web:abcd"
        }"#,
    )
    .unwrap();
    assert_eq!(config.api_key, "key-1");
    assert_eq!(config.auth_domain, "demo.firebaseapp.com");
    assert_eq!(config.project_id, "demo");
    assert_eq!(config.storage_bucket, "demo.appspot.com");
    assert_eq!(config.messaging_sender_id, "1234");
    assert_eq!(config.app_id, "1:1234:web:abcd");
}

#[test]
fn from_json_defaults_optional_keys() {
    let config = BackendConfig::from_json(r#"{ "apiKey": "k", "projectId": "p" }"#).unwrap();
    assert_eq!(config.project_id, "p");
    assert!(config.auth_domain.is_empty());
    assert!(config.app_id.is_empty());
}

#[test]
fn from_json_rejects_missing_project_id() {
    let err = BackendConfig::from_json(r#"{ "apiKey": "k" }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid backend config:"));
}

#[test]
fn from_json_rejects_garbage() {
    assert!(matches!(BackendConfig::from_json("not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn embedded_config_parses() {
    let config = BackendConfig::embedded().unwrap();
    assert!(!config.api_key.is_empty());
    assert!(!config.project_id.is_empty());
}
