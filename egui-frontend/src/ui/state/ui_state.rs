//! # UI State Module
//!
//! Open/closed state of every collapsible section on every screen. This is
//! presentation state only; the domain services never see it.
//!
//! Sections start open except the social screen's search, pending-request and
//! social-media panels.

use std::collections::HashMap;

use shared::{DayLabel, GoalCategory, GoalStatus};

/// Every collapsible section in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    // Dashboard
    DashboardClasses,
    DashboardAssignments,
    DashboardEvents,
    DashboardOthers,

    // Routines
    RoutineDay(DayLabel),

    // Budget
    BudgetCategories,
    BudgetTransactions,

    // Social
    SocialEvents,
    SocialToday,
    SocialUpcoming,
    SocialFavorites,
    SocialGroups,
    SocialFriends,
    SocialSearchFriends,
    SocialPendingRequests,
    SocialMedia,
    SocialClubs,

    // Career
    CareerCategory(GoalCategory),
    CareerPartition(GoalCategory, GoalStatus),

    // Settings
    SettingsProfile,
    SettingsAppearance,
    SettingsNotifications,
    SettingsPrivacy,
    SettingsHelp,
}

impl SectionKey {
    pub fn default_open(&self) -> bool {
        !matches!(
            self,
            SectionKey::SocialSearchFriends | SectionKey::SocialPendingRequests | SectionKey::SocialMedia
        )
    }
}

/// Section visibility, storing only sections the user has toggled
#[derive(Debug, Clone, Default)]
pub struct SectionVisibility {
    overrides: HashMap<SectionKey, bool>,
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: SectionKey) -> bool {
        self.overrides.get(&key).copied().unwrap_or_else(|| key.default_open())
    }

    pub fn toggle(&mut self, key: SectionKey) {
        let open = !self.is_open(key);
        self.overrides.insert(key, open);
    }
}
