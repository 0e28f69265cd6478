use super::*;

#[test]
fn ui_state_default_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
}

#[test]
fn ui_state_default_theme_follows_system() {
    assert_eq!(UiState::default().theme, ThemePreference::System);
}

#[test]
fn toggle_sidebar_flips_visibility() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}
