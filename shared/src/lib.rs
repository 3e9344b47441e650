use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screens reachable from the bottom tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Dashboard,
    Routines,
    Budget,
    Social,
    Career,
    Settings,
}

impl ViewType {
    /// Tab bar order
    pub const ALL: [ViewType; 6] = [
        ViewType::Dashboard,
        ViewType::Routines,
        ViewType::Budget,
        ViewType::Social,
        ViewType::Career,
        ViewType::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Dashboard => "Dashboard",
            ViewType::Routines => "Routines",
            ViewType::Budget => "Budget",
            ViewType::Social => "Social",
            ViewType::Career => "Career",
            ViewType::Settings => "Settings",
        }
    }
}

impl Default for ViewType {
    fn default() -> Self {
        ViewType::Dashboard
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Books,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Books,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Books => "Books",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single purchase recorded against the monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    /// What was bought
    pub item: String,
    /// Always positive
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Display date, e.g. "Nov 8"
    pub date: String,
}

/// Raw input from the "Add Expense" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub item: String,
    /// Unparsed amount text, e.g. "12.50" or "$12.50"
    pub amount: String,
    /// `None` while the category picker is unset
    pub category: Option<ExpenseCategory>,
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// Spent/remaining split against the monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    /// Negative when overspent
    pub remaining: f64,
}

impl BudgetStatus {
    /// Share of the budget already spent, 0 when the budget itself is 0
    pub fn spent_percentage(&self) -> f64 {
        if self.budget > 0.0 {
            self.spent / self.budget * 100.0
        } else {
            0.0
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }

    /// Rough share of the month's spending that fell in the current week
    pub fn this_week_estimate(&self) -> f64 {
        self.spent * WEEKLY_SHARE
    }
}

const WEEKLY_SHARE: f64 = 0.3;

/// Expense summary grouped by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// First-seen category order
    pub by_category: Vec<CategoryTotal>,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// Career goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Internships,
    #[serde(rename = "Job Applications")]
    JobApplications,
    Interviews,
    Networking,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 4] = [
        GoalCategory::Internships,
        GoalCategory::JobApplications,
        GoalCategory::Interviews,
        GoalCategory::Networking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Internships => "Internships",
            GoalCategory::JobApplications => "Job Applications",
            GoalCategory::Interviews => "Interviews",
            GoalCategory::Networking => "Networking",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Current,
    Pending,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 2] = [GoalStatus::Current, GoalStatus::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::Current => "current",
            GoalStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A career goal with manual progress tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Date string as typed in the form, e.g. "2025-12-01"
    pub deadline: String,
    /// 0-100
    pub progress: u8,
    pub category: GoalCategory,
    pub status: GoalStatus,
    pub completed: bool,
}

/// Raw input from the "Add Goal" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
}

impl Default for CreateGoalRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            deadline: String::new(),
            category: GoalCategory::Internships,
            status: GoalStatus::Current,
        }
    }
}

// ---------------------------------------------------------------------------
// Weekly routines
// ---------------------------------------------------------------------------

/// Three-letter weekday label used by routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayLabel {
    /// Week order, Monday first
    pub const ALL: [DayLabel; 7] = [
        DayLabel::Mon,
        DayLabel::Tue,
        DayLabel::Wed,
        DayLabel::Thu,
        DayLabel::Fri,
        DayLabel::Sat,
        DayLabel::Sun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayLabel::Mon => "Mon",
            DayLabel::Tue => "Tue",
            DayLabel::Wed => "Wed",
            DayLabel::Thu => "Thu",
            DayLabel::Fri => "Fri",
            DayLabel::Sat => "Sat",
            DayLabel::Sun => "Sun",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            DayLabel::Mon => "Monday",
            DayLabel::Tue => "Tuesday",
            DayLabel::Wed => "Wednesday",
            DayLabel::Thu => "Thursday",
            DayLabel::Fri => "Friday",
            DayLabel::Sat => "Saturday",
            DayLabel::Sun => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayLabel {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayLabel::Mon,
            chrono::Weekday::Tue => DayLabel::Tue,
            chrono::Weekday::Wed => DayLabel::Wed,
            chrono::Weekday::Thu => DayLabel::Thu,
            chrono::Weekday::Fri => DayLabel::Fri,
            chrono::Weekday::Sat => DayLabel::Sat,
            chrono::Weekday::Sun => DayLabel::Sun,
        }
    }
}

impl FromStr for DayLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayLabel::ALL
            .iter()
            .copied()
            .find(|day| day.label() == s.trim())
            .ok_or_else(|| format!("Unknown day label: {}", s))
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineCategory {
    Class,
    Gym,
    Study,
    Social,
}

impl RoutineCategory {
    pub const ALL: [RoutineCategory; 4] = [
        RoutineCategory::Class,
        RoutineCategory::Gym,
        RoutineCategory::Study,
        RoutineCategory::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoutineCategory::Class => "class",
            RoutineCategory::Gym => "gym",
            RoutineCategory::Study => "study",
            RoutineCategory::Social => "social",
        }
    }
}

impl fmt::Display for RoutineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recurring weekly activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: u64,
    pub title: String,
    /// Display time, e.g. "9:00 AM"
    pub time: String,
    /// Days the routine repeats on, no duplicates
    pub days: Vec<DayLabel>,
    pub category: RoutineCategory,
}

impl Routine {
    pub fn occurs_on(&self, day: DayLabel) -> bool {
        self.days.contains(&day)
    }
}

/// Raw input from the "Add Routine" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoutineRequest {
    pub title: String,
    pub time: String,
    pub days: Vec<DayLabel>,
    pub category: RoutineCategory,
}

impl Default for CreateRoutineRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            time: String::new(),
            days: Vec::new(),
            category: RoutineCategory::Class,
        }
    }
}

// ---------------------------------------------------------------------------
// Social hub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Academic,
    Sports,
    Career,
    Arts,
    Cultural,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Academic => "Academic",
            EventCategory::Sports => "Sports",
            EventCategory::Career => "Career",
            EventCategory::Arts => "Arts",
            EventCategory::Cultural => "Cultural",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTiming {
    Today,
    Upcoming,
}

/// A campus event the student can RSVP to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: u32,
    pub category: EventCategory,
    pub rsvped: bool,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
    pub timing: EventTiming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub members: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: u64,
    pub name: String,
    pub status: FriendStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: u64,
    pub name: String,
    pub members: u32,
    pub category: String,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Medium
    }
}

/// Notification switches on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationSetting {
    AssignmentReminders,
    EventNotifications,
    BudgetAlerts,
    WellnessReminders,
}

impl NotificationSetting {
    pub const ALL: [NotificationSetting; 4] = [
        NotificationSetting::AssignmentReminders,
        NotificationSetting::EventNotifications,
        NotificationSetting::BudgetAlerts,
        NotificationSetting::WellnessReminders,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationSetting::AssignmentReminders => "Assignment Reminders",
            NotificationSetting::EventNotifications => "Event Notifications",
            NotificationSetting::BudgetAlerts => "Budget Alerts",
            NotificationSetting::WellnessReminders => "Wellness Reminders",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationSetting::AssignmentReminders => "Get notified before assignments are due",
            NotificationSetting::EventNotifications => "Updates about campus events",
            NotificationSetting::BudgetAlerts => "Alerts when approaching budget limits",
            NotificationSetting::WellnessReminders => "Reminders for wellness activities",
        }
    }
}

/// Student profile shown on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
}

impl Profile {
    /// Uppercase first letter of each name part, e.g. "AJ"
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
