use super::*;

#[test]
fn defaults_match_new_account_preferences() {
    let settings = SettingsState::default();
    assert!(settings.notifications.email);
    assert!(settings.notifications.browser);
    assert!(settings.notifications.tasks);
    assert!(!settings.notifications.news);
    assert_eq!(settings.privacy.visibility, ProfileVisibility::Team);
    assert!(settings.privacy.show_rank);
    assert!(settings.privacy.share_activity);
    assert_eq!(settings.appearance.theme, ThemePreference::System);
    assert_eq!(settings.appearance.font_size, FontSize::Medium);
}

#[test]
fn notification_toggles_are_independent() {
    let mut notifications = NotificationSettings::default();
    notifications.set(NotificationKind::News, true);
    notifications.set(NotificationKind::Email, false);
    assert!(notifications.get(NotificationKind::News));
    assert!(!notifications.get(NotificationKind::Email));
    assert!(notifications.get(NotificationKind::Browser));
}

#[test]
fn select_values_parse_back() {
    for visibility in ProfileVisibility::ALL {
        assert_eq!(ProfileVisibility::parse(visibility.as_str()), Some(visibility));
    }
    for size in FontSize::ALL {
        assert_eq!(FontSize::parse(size.as_str()), Some(size));
    }
    assert_eq!(FontSize::parse("huge"), None);
}
