//! Preferences edited on the settings page.
//!
//! Nothing here is persisted server-side; saving is simulated. Only the
//! theme takes effect, through [`crate::util::dark_mode`].

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::dark_mode::ThemePreference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub browser: bool,
    pub tasks: bool,
    pub news: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { email: true, browser: true, tasks: true, news: false }
    }
}

/// Who can see the user's profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileVisibility {
    Public,
    #[default]
    Team,
    Private,
}

impl ProfileVisibility {
    pub const ALL: [Self; 3] = [Self::Public, Self::Team, Self::Private];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Team => "team",
            Self::Private => "private",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "Everyone",
            Self::Team => "My team",
            Self::Private => "Only me",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivacySettings {
    pub visibility: ProfileVisibility,
    pub show_rank: bool,
    pub share_activity: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self { visibility: ProfileVisibility::Team, show_rank: true, share_activity: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppearanceSettings {
    pub theme: ThemePreference,
    pub font_size: FontSize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
}

/// Notification toggle addressed by the checkbox `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Browser,
    Tasks,
    News,
}

impl NotificationKind {
    pub const ALL: [Self; 4] = [Self::Email, Self::Browser, Self::Tasks, Self::News];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email notifications",
            Self::Browser => "Browser notifications",
            Self::Tasks => "New task alerts",
            Self::News => "Platform news",
        }
    }
}

impl NotificationSettings {
    #[must_use]
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Browser => self.browser,
            NotificationKind::Tasks => self.tasks,
            NotificationKind::News => self.news,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        match kind {
            NotificationKind::Email => self.email = enabled,
            NotificationKind::Browser => self.browser = enabled,
            NotificationKind::Tasks => self.tasks = enabled,
            NotificationKind::News => self.news = enabled,
        }
    }
}
