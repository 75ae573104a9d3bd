use super::*;

#[test]
fn display_state_default_is_blank() {
    let state = DisplayState::default();
    assert_eq!(state.name_text(), "");
    assert_eq!(state.email_text(), "");
}

#[test]
fn signal_surface_writes_fields() {
    let signal = RwSignal::new(DisplayState::default());
    signal.set_email("ada@example.com");
    signal.set_name("Ada");
    let state = signal.get_untracked();
    assert_eq!(state.email.as_deref(), Some("ada@example.com"));
    assert_eq!(state.name_text(), "Ada");
}
