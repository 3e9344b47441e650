//! # Actions Module
//!
//! Submit handlers for the three creation dialogs.
//!
//! A rejected submit leaves the dialog open with its input intact and shows no
//! message; the reason only goes to the debug log. A successful submit clears
//! the form and closes the dialog.

use log::{debug, info};

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::state::CreationModal;

impl CollegeLifeApp {
    /// Returns true if an expense was added
    pub fn submit_expense(&mut self) -> bool {
        match self.backend.expense_service.add_expense(self.modals.expense_form.clone()) {
            Ok(expense) => {
                info!("💸 Expense dialog submitted: {} ({})", expense.item, expense.id);
                self.modals.complete(CreationModal::Expense);
                true
            }
            Err(e) => {
                debug!("Expense dialog kept open: {}", e);
                false
            }
        }
    }

    /// Returns true if a goal was added
    pub fn submit_goal(&mut self) -> bool {
        match self.backend.goal_service.add_goal(self.modals.goal_form.clone()) {
            Ok(goal) => {
                info!("🎯 Goal dialog submitted: {} ({})", goal.title, goal.id);
                self.modals.complete(CreationModal::Goal);
                true
            }
            Err(e) => {
                debug!("Goal dialog kept open: {}", e);
                false
            }
        }
    }

    /// Returns true if a routine was added
    pub fn submit_routine(&mut self) -> bool {
        match self.backend.routine_service.add_routine(self.modals.routine_form.clone()) {
            Ok(routine) => {
                info!("📅 Routine dialog submitted: {} ({})", routine.title, routine.id);
                self.modals.complete(CreationModal::Routine);
                true
            }
            Err(e) => {
                debug!("Routine dialog kept open: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use shared::{DayLabel, ExpenseCategory};

    fn create_test_app() -> CollegeLifeApp {
        CollegeLifeApp::new(AppConfig::default())
    }

    #[test]
    fn test_rejected_expense_keeps_dialog_and_input() {
        let mut app = create_test_app();
        app.modals.show(CreationModal::Expense);
        app.modals.expense_form.item = "Coffee".to_string();
        app.modals.expense_form.amount = "-3".to_string();

        assert!(!app.submit_expense());
        assert!(app.modals.is_showing(CreationModal::Expense));
        assert_eq!(app.modals.expense_form.item, "Coffee");
        assert_eq!(app.modals.expense_form.amount, "-3");
        assert_eq!(app.backend.expense_service.expenses().len(), 6);
    }

    #[test]
    fn test_accepted_expense_closes_dialog() {
        let mut app = create_test_app();
        app.modals.show(CreationModal::Expense);
        app.modals.expense_form.item = "Coffee".to_string();
        app.modals.expense_form.amount = "$4.50".to_string();
        app.modals.expense_form.category = Some(ExpenseCategory::Food);

        assert!(app.submit_expense());
        assert_eq!(app.modals.active_modal, None);
        assert!(app.modals.expense_form.item.is_empty());
        assert_eq!(app.backend.expense_service.expenses()[0].item, "Coffee");
        assert_eq!(app.backend.expense_service.total_spent(), 184.5);
    }

    #[test]
    fn test_goal_without_deadline_is_rejected() {
        let mut app = create_test_app();
        app.modals.show(CreationModal::Goal);
        app.modals.goal_form.title = "Apply to Acme".to_string();

        assert!(!app.submit_goal());
        assert!(app.modals.is_showing(CreationModal::Goal));
        assert_eq!(app.backend.goal_service.total_count(), 8);

        app.modals.goal_form.deadline = "2025-12-01".to_string();
        assert!(app.submit_goal());
        assert_eq!(app.backend.goal_service.total_count(), 9);
    }

    #[test]
    fn test_routine_needs_days() {
        let mut app = create_test_app();
        app.modals.show(CreationModal::Routine);
        app.modals.routine_form.title = "Yoga".to_string();
        app.modals.routine_form.time = "7:00 AM".to_string();

        assert!(!app.submit_routine());
        assert!(app.modals.is_showing(CreationModal::Routine));

        app.modals.toggle_routine_day(DayLabel::Sat);
        assert!(app.submit_routine());
        assert_eq!(app.backend.routine_service.routines_for_day(DayLabel::Sat).last().map(|r| r.title.as_str()), Some("Yoga"));
    }
}
