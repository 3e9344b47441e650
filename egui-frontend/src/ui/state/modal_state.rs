//! # Modal State Module
//!
//! Visibility of the three creation dialogs and the form input behind each.
//!
//! Input survives closing a dialog (Cancel or ESC) and survives a rejected
//! submit; it is only cleared after a record is actually created.

use shared::{CreateExpenseRequest, CreateGoalRequest, CreateRoutineRequest, DayLabel, ExpenseCategory};

/// Which creation dialog, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationModal {
    Expense,
    Goal,
    Routine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    /// Dialog currently shown
    pub active_modal: Option<CreationModal>,

    pub expense_form: CreateExpenseRequest,
    pub goal_form: CreateGoalRequest,
    pub routine_form: CreateRoutineRequest,
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            active_modal: None,
            expense_form: Self::blank_expense_form(),
            goal_form: CreateGoalRequest::default(),
            routine_form: CreateRoutineRequest::default(),
        }
    }

    /// The expense form preselects Food
    fn blank_expense_form() -> CreateExpenseRequest {
        CreateExpenseRequest {
            category: Some(ExpenseCategory::Food),
            ..CreateExpenseRequest::default()
        }
    }

    pub fn show(&mut self, modal: CreationModal) {
        self.active_modal = Some(modal);
    }

    pub fn is_showing(&self, modal: CreationModal) -> bool {
        self.active_modal == Some(modal)
    }

    /// Hide whatever dialog is open, keeping its input
    pub fn hide_all_modals(&mut self) {
        self.active_modal = None;
    }

    /// Close a dialog after a successful create
    pub fn complete(&mut self, modal: CreationModal) {
        match modal {
            CreationModal::Expense => self.expense_form = Self::blank_expense_form(),
            CreationModal::Goal => self.goal_form = CreateGoalRequest::default(),
            CreationModal::Routine => self.routine_form = CreateRoutineRequest::default(),
        }
        if self.is_showing(modal) {
            self.active_modal = None;
        }
    }

    /// Add or remove a day from the routine form's selection
    pub fn toggle_routine_day(&mut self, day: DayLabel) {
        let days = &mut self.routine_form.days;
        if let Some(index) = days.iter().position(|d| *d == day) {
            days.remove(index);
        } else {
            days.push(day);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_keeps_input() {
        let mut modals = ModalState::new();
        modals.show(CreationModal::Expense);
        modals.expense_form.item = "Pizza".to_string();

        modals.hide_all_modals();
        assert!(!modals.is_showing(CreationModal::Expense));
        assert_eq!(modals.expense_form.item, "Pizza");
    }

    #[test]
    fn test_complete_resets_form() {
        let mut modals = ModalState::new();
        modals.show(CreationModal::Goal);
        modals.goal_form.title = "Send resume".to_string();

        modals.complete(CreationModal::Goal);
        assert_eq!(modals.active_modal, None);
        assert!(modals.goal_form.title.is_empty());
    }

    #[test]
    fn test_expense_form_defaults_to_food() {
        let modals = ModalState::new();
        assert_eq!(modals.expense_form.category, Some(ExpenseCategory::Food));
    }

    #[test]
    fn test_toggle_routine_day() {
        let mut modals = ModalState::new();
        modals.toggle_routine_day(DayLabel::Tue);
        modals.toggle_routine_day(DayLabel::Thu);
        modals.toggle_routine_day(DayLabel::Tue);

        assert_eq!(modals.routine_form.days, vec![DayLabel::Thu]);
    }
}
