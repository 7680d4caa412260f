use super::*;

#[test]
fn ui_state_defaults_to_light_mode() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_defaults_to_closed_mobile_menu() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}
