use super::*;

#[test]
fn port_defaults_when_unset() {
    assert_eq!(ServerConfig::from_port_var(None).unwrap(), ServerConfig { port: 3000 });
}

#[test]
fn port_is_parsed() {
    assert_eq!(ServerConfig::from_port_var(Some("8080".to_owned())).unwrap().port, 8080);
    assert_eq!(ServerConfig::from_port_var(Some(" 9000\n".to_owned())).unwrap().port, 9000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_port_var(Some("http".to_owned())).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
    assert!(ServerConfig::from_port_var(Some("70000".to_owned())).is_err());
}
