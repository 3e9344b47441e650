//! # Theme Configuration
//!
//! Centralized colors and category mappings for the college life planner.
//! All visual styling should use these constants so light and dark mode stay
//! consistent across screens.
//!
//! ## Usage
//! ```ignore
//! use crate::ui::components::theme::{colors, expense_category_color};
//!
//! let color = expense_category_color(ExpenseCategory::Food);
//! ```

use eframe::egui::Color32;

use crate::backend::domain::DashboardBadge;
use shared::{EventCategory, ExpenseCategory, GoalCategory, RoutineCategory};

/// Color constants shared by every screen
pub mod colors {
    use eframe::egui::Color32;

    // Accent used for the selected tab and primary buttons
    pub const ACCENT: Color32 = Color32::from_rgb(79, 109, 245);
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(126, 120, 229);

    // Status colors
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 139, 34);
    pub const WARNING: Color32 = Color32::from_rgb(230, 145, 30);
    pub const DANGER: Color32 = Color32::from_rgb(220, 20, 60);

    // Muted text for secondary lines
    pub const MUTED: Color32 = Color32::from_rgb(128, 128, 128);

    // Highlight behind today's routine column
    pub const TODAY_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(79, 109, 245, 40);

    // Modal overlay
    pub const MODAL_DIM: Color32 = Color32::from_rgba_premultiplied(10, 20, 40, 150);
}

pub fn expense_category_color(category: ExpenseCategory) -> Color32 {
    match category {
        ExpenseCategory::Food => Color32::from_rgb(255, 140, 66),
        ExpenseCategory::Transport => Color32::from_rgb(66, 135, 245),
        ExpenseCategory::Books => Color32::from_rgb(156, 89, 209),
        ExpenseCategory::Entertainment => Color32::from_rgb(232, 84, 140),
        ExpenseCategory::Other => Color32::from_rgb(120, 120, 120),
    }
}

pub fn expense_category_icon(category: ExpenseCategory) -> &'static str {
    match category {
        ExpenseCategory::Food => "🍔",
        ExpenseCategory::Transport => "🚌",
        ExpenseCategory::Books => "📚",
        ExpenseCategory::Entertainment => "🎬",
        ExpenseCategory::Other => "🛍",
    }
}

pub fn routine_category_color(category: RoutineCategory) -> Color32 {
    match category {
        RoutineCategory::Class => Color32::from_rgb(66, 135, 245),
        RoutineCategory::Gym => Color32::from_rgb(34, 170, 90),
        RoutineCategory::Study => Color32::from_rgb(156, 89, 209),
        RoutineCategory::Social => Color32::from_rgb(232, 84, 140),
    }
}

pub fn goal_category_icon(category: GoalCategory) -> &'static str {
    match category {
        GoalCategory::Internships => "💼",
        GoalCategory::JobApplications => "📝",
        GoalCategory::Interviews => "🎤",
        GoalCategory::Networking => "🤝",
    }
}

pub fn event_category_color(category: EventCategory) -> Color32 {
    match category {
        EventCategory::Academic => Color32::from_rgb(66, 135, 245),
        EventCategory::Sports => Color32::from_rgb(34, 170, 90),
        EventCategory::Career => Color32::from_rgb(230, 145, 30),
        EventCategory::Arts => Color32::from_rgb(232, 84, 140),
        EventCategory::Cultural => Color32::from_rgb(156, 89, 209),
    }
}

pub fn badge_color(badge: DashboardBadge) -> Color32 {
    match badge {
        DashboardBadge::Today => colors::ACCENT,
        DashboardBadge::Urgent => colors::DANGER,
        DashboardBadge::DueSoon => colors::WARNING,
        DashboardBadge::Upcoming => colors::ACCENT_SOFT,
        DashboardBadge::Evening => Color32::from_rgb(156, 89, 209),
        DashboardBadge::NextWeek => colors::MUTED,
        DashboardBadge::Wellness => colors::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_expense_categories_have_distinct_colors() {
        let colors: HashSet<_> = ExpenseCategory::ALL.iter().map(|c| expense_category_color(*c)).collect();
        assert_eq!(colors.len(), ExpenseCategory::ALL.len());
    }

    #[test]
    fn test_routine_categories_have_distinct_colors() {
        let colors: HashSet<_> = RoutineCategory::ALL.iter().map(|c| routine_category_color(*c)).collect();
        assert_eq!(colors.len(), RoutineCategory::ALL.len());
    }
}
