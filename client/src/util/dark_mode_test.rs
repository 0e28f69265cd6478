use super::*;

#[test]
fn explicit_preferences_ignore_system() {
    assert!(!ThemePreference::Light.is_dark(true));
    assert!(ThemePreference::Dark.is_dark(false));
}

#[test]
fn system_preference_follows_media_query() {
    assert!(ThemePreference::System.is_dark(true));
    assert!(!ThemePreference::System.is_dark(false));
}

#[test]
fn parse_round_trips_select_values() {
    for theme in ThemePreference::ALL {
        assert_eq!(ThemePreference::parse(theme.as_str()), Some(theme));
    }
    assert_eq!(ThemePreference::parse("sepia"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    assert!(!system_prefers_dark());
    apply(ThemePreference::Dark);
    apply(ThemePreference::System);
}
