//! Settings domain logic.
//!
//! Independent notification switches and the font size choice. Dark mode is
//! not stored here: it also drives the shell's global theme, so the shell owns
//! it and lends it out through [`DarkModeControl`].

use log::info;

use crate::backend::domain::fixtures;
use shared::{FontSize, NotificationSetting, Profile};

/// Read/write access to the shell-owned dark-mode flag
pub trait DarkModeControl {
    fn dark_mode(&self) -> bool;
    fn set_dark_mode(&mut self, enabled: bool);
}

#[derive(Debug, Clone)]
pub struct SettingsService {
    assignment_reminders: bool,
    event_notifications: bool,
    budget_alerts: bool,
    wellness_reminders: bool,
    font_size: FontSize,
    profile: Profile,
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsService {
    pub fn new() -> Self {
        Self {
            assignment_reminders: true,
            event_notifications: true,
            budget_alerts: true,
            wellness_reminders: false,
            font_size: FontSize::Medium,
            profile: fixtures::profile(),
        }
    }

    pub fn is_enabled(&self, setting: NotificationSetting) -> bool {
        match setting {
            NotificationSetting::AssignmentReminders => self.assignment_reminders,
            NotificationSetting::EventNotifications => self.event_notifications,
            NotificationSetting::BudgetAlerts => self.budget_alerts,
            NotificationSetting::WellnessReminders => self.wellness_reminders,
        }
    }

    pub fn set_enabled(&mut self, setting: NotificationSetting, enabled: bool) {
        let flag = match setting {
            NotificationSetting::AssignmentReminders => &mut self.assignment_reminders,
            NotificationSetting::EventNotifications => &mut self.event_notifications,
            NotificationSetting::BudgetAlerts => &mut self.budget_alerts,
            NotificationSetting::WellnessReminders => &mut self.wellness_reminders,
        };
        *flag = enabled;
        info!("🔔 {} set to {}", setting.label(), enabled);
    }

    /// Flip one switch, leaving the others alone
    pub fn toggle(&mut self, setting: NotificationSetting) {
        let enabled = !self.is_enabled(setting);
        self.set_enabled(setting, enabled);
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        if self.font_size != font_size {
            info!("🔤 Font size set to {}", font_size.label());
        }
        self.font_size = font_size;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_dark_mode(&self, control: &mut dyn DarkModeControl, enabled: bool) {
        if control.dark_mode() != enabled {
            info!("🌙 Dark mode set to {}", enabled);
        }
        control.set_dark_mode(enabled);
    }

    pub fn toggle_dark_mode(&self, control: &mut dyn DarkModeControl) {
        let enabled = !control.dark_mode();
        self.set_dark_mode(control, enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shell {
        dark: bool,
    }

    impl DarkModeControl for Shell {
        fn dark_mode(&self) -> bool {
            self.dark
        }

        fn set_dark_mode(&mut self, enabled: bool) {
            self.dark = enabled;
        }
    }

    #[test]
    fn test_defaults() {
        let settings = SettingsService::new();

        assert!(settings.is_enabled(NotificationSetting::AssignmentReminders));
        assert!(settings.is_enabled(NotificationSetting::EventNotifications));
        assert!(settings.is_enabled(NotificationSetting::BudgetAlerts));
        assert!(!settings.is_enabled(NotificationSetting::WellnessReminders));
        assert_eq!(settings.font_size(), FontSize::Medium);
        assert_eq!(settings.profile().initials(), "AJ");
    }

    #[test]
    fn test_toggle_flips_only_one_setting() {
        let mut settings = SettingsService::new();
        settings.toggle(NotificationSetting::BudgetAlerts);

        for setting in NotificationSetting::ALL {
            let expected = match setting {
                NotificationSetting::BudgetAlerts | NotificationSetting::WellnessReminders => false,
                _ => true,
            };
            assert_eq!(settings.is_enabled(setting), expected, "{:?}", setting);
        }

        settings.toggle(NotificationSetting::BudgetAlerts);
        assert!(settings.is_enabled(NotificationSetting::BudgetAlerts));
    }

    #[test]
    fn test_font_size() {
        let mut settings = SettingsService::new();
        settings.set_font_size(FontSize::Large);
        assert_eq!(settings.font_size(), FontSize::Large);
    }

    #[test]
    fn test_dark_mode_lives_in_the_shell() {
        let settings = SettingsService::new();
        let mut shell = Shell { dark: false };

        settings.toggle_dark_mode(&mut shell);
        assert!(shell.dark);

        settings.set_dark_mode(&mut shell, false);
        assert!(!shell.dark);
    }
}
