//! Dashboard view model.
//!
//! The day-at-a-glance lists (classes, assignments, events, others) are fixed
//! fixtures. The budget card is computed from the live expense list so it can
//! never disagree with the budget screen.

use chrono::{Local, Timelike};

use crate::backend::domain::expense_service::ExpenseService;
use shared::BudgetStatus;

/// Badge shown on a dashboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardBadge {
    Today,
    Urgent,
    DueSoon,
    Upcoming,
    Evening,
    NextWeek,
    Wellness,
}

impl DashboardBadge {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardBadge::Today => "Today",
            DashboardBadge::Urgent => "Urgent",
            DashboardBadge::DueSoon => "Due Soon",
            DashboardBadge::Upcoming => "Upcoming",
            DashboardBadge::Evening => "Evening",
            DashboardBadge::NextWeek => "Next Week",
            DashboardBadge::Wellness => "Wellness",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEntry {
    pub title: String,
    pub detail: String,
    pub badge: DashboardBadge,
}

impl DashboardEntry {
    fn new(title: &str, detail: &str, badge: DashboardBadge) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            badge,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub status: BudgetStatus,
    pub on_track: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WellnessSummary {
    pub label: String,
    /// 0-100
    pub progress: u8,
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    student_name: String,
    classes: Vec<DashboardEntry>,
    assignments: Vec<DashboardEntry>,
    events: Vec<DashboardEntry>,
    others: Vec<DashboardEntry>,
    wellness: WellnessSummary,
}

impl DashboardService {
    pub fn new(student_name: &str) -> Self {
        use DashboardBadge::*;

        Self {
            student_name: student_name.to_string(),
            classes: vec![
                DashboardEntry::new("Computer Science Lecture", "9:00 AM - 10:30 AM • Building A-204", Today),
                DashboardEntry::new("Calculus II", "11:00 AM - 12:30 PM • Math Building 101", Today),
                DashboardEntry::new("Physics Lab", "2:00 PM - 4:00 PM • Science Building Lab 3", Today),
            ],
            assignments: vec![
                DashboardEntry::new("Assignment Due: Data Structures", "Due by 11:59 PM today", Urgent),
                DashboardEntry::new("Physics Problem Set 5", "Due Nov 10, 11:59 PM", DueSoon),
                DashboardEntry::new("Essay: Renaissance Art", "Due Nov 15, 11:59 PM", Upcoming),
            ],
            events: vec![
                DashboardEntry::new("Study Group - Physics", "6:00 PM - 7:30 PM • Library Room 3", Evening),
                DashboardEntry::new("Career Fair", "Nov 15 • 10:00 AM - 4:00 PM", NextWeek),
            ],
            others: vec![DashboardEntry::new("Gym Session", "8:00 PM - 9:00 PM • Campus Fitness Center", Wellness)],
            wellness: WellnessSummary {
                label: "Today's Goals".to_string(),
                progress: 75,
            },
        }
    }

    pub fn greeting(&self) -> String {
        self.greeting_at(Local::now().hour())
    }

    pub fn greeting_at(&self, hour: u32) -> String {
        format!("{}, {}! Here's your day at a glance", greeting_for_hour(hour), self.student_name)
    }

    pub fn classes(&self) -> &[DashboardEntry] {
        &self.classes
    }

    pub fn assignments(&self) -> &[DashboardEntry] {
        &self.assignments
    }

    pub fn events(&self) -> &[DashboardEntry] {
        &self.events
    }

    pub fn others(&self) -> &[DashboardEntry] {
        &self.others
    }

    /// Budget, wellness and the "others" rows all live in one section
    pub fn others_count(&self) -> usize {
        self.others.len() + 2
    }

    pub fn wellness(&self) -> &WellnessSummary {
        &self.wellness
    }

    pub fn budget_summary(&self, expenses: &ExpenseService) -> BudgetSummary {
        let status = expenses.budget_status();
        BudgetSummary {
            on_track: !status.is_over_budget(),
            status,
        }
    }
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
