//! Expense tracking domain logic.
//!
//! Owns the expense list and derives the budget view model from it: totals per
//! category, and the spent/remaining split against the configured monthly
//! budget.
//!
//! ## Business Rules
//!
//! - Item, amount and category are required; the amount must parse to a
//!   positive number
//! - New expenses go to the front of the list (newest first)
//! - New expenses are stamped with today's date as "Mon D"
//! - Overspending is allowed; `remaining` simply goes negative

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::backend::domain::fixtures;
use crate::backend::domain::id_generator::{next_id, now_millis};
use crate::backend::domain::models::expense::{parse_amount, ExpenseValidationError, ValidatedExpense};
use crate::backend::domain::partition::sum_by_key;
use shared::{BudgetStatus, CategoryTotal, CreateExpenseRequest, Expense, ExpenseSummary};

#[derive(Debug, Clone)]
pub struct ExpenseService {
    expenses: Vec<Expense>,
    monthly_budget: f64,
    currency_symbol: String,
}

impl ExpenseService {
    /// Service seeded with the default expense fixtures
    pub fn new(monthly_budget: f64, currency_symbol: &str) -> Self {
        Self::with_expenses(fixtures::expenses(), monthly_budget, currency_symbol)
    }

    pub fn with_expenses(expenses: Vec<Expense>, monthly_budget: f64, currency_symbol: &str) -> Self {
        Self {
            expenses,
            monthly_budget,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// All expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Check the form input without touching the list
    pub fn validate(&self, request: &CreateExpenseRequest) -> Result<ValidatedExpense, ExpenseValidationError> {
        let item = request.item.trim();
        if item.is_empty() {
            return Err(ExpenseValidationError::EmptyItem);
        }
        if request.amount.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyAmount);
        }
        let category = request.category.ok_or(ExpenseValidationError::MissingCategory)?;
        let amount = parse_amount(&request.amount, &self.currency_symbol)?;

        Ok(ValidatedExpense {
            item: item.to_string(),
            amount,
            category,
        })
    }

    /// Record a new expense dated today
    pub fn add_expense(&mut self, request: CreateExpenseRequest) -> Result<Expense, ExpenseValidationError> {
        self.add_expense_on(request, Local::now().date_naive(), now_millis())
    }

    /// Record a new expense with an explicit date and clock reading
    pub fn add_expense_on(
        &mut self,
        request: CreateExpenseRequest,
        today: NaiveDate,
        now_millis: u64,
    ) -> Result<Expense, ExpenseValidationError> {
        let validated = match self.validate(&request) {
            Ok(v) => v,
            Err(e) => {
                debug!("Rejected expense {:?}: {}", request, e);
                return Err(e);
            }
        };

        let expense = Expense {
            id: next_id(self.expenses.iter().map(|e| e.id), now_millis),
            item: validated.item,
            amount: validated.amount,
            category: validated.category,
            date: format_display_date(today),
        };

        let mut updated = Vec::with_capacity(self.expenses.len() + 1);
        updated.push(expense.clone());
        updated.extend(self.expenses.iter().cloned());
        self.expenses = updated;

        info!("💸 Added expense {} '{}' ({:.2})", expense.id, expense.item, expense.amount);
        Ok(expense)
    }

    /// Totals per category in first-seen order
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        sum_by_key(&self.expenses, |e| e.category, |e| e.amount)
            .into_iter()
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect()
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn budget_status(&self) -> BudgetStatus {
        let spent = self.total_spent();
        BudgetStatus {
            budget: self.monthly_budget,
            spent,
            remaining: self.monthly_budget - spent,
        }
    }

    /// Category breakdown plus grand total
    pub fn summary(&self) -> ExpenseSummary {
        ExpenseSummary {
            by_category: self.category_totals(),
            total: self.total_spent(),
        }
    }
}

/// "Nov 8" style date used on expense rows
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ExpenseCategory;

    fn create_test_service() -> ExpenseService {
        ExpenseService::new(800.0, "$")
    }

    fn request(item: &str, amount: &str, category: Option<ExpenseCategory>) -> CreateExpenseRequest {
        CreateExpenseRequest {
            item: item.to_string(),
            amount: amount.to_string(),
            category,
        }
    }

    fn nov_8() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 8).unwrap()
    }

    #[test]
    fn test_default_budget_status() {
        let service = create_test_service();
        let status = service.budget_status();

        assert_eq!(service.expenses().len(), 6);
        assert_eq!(status.budget, 800.0);
        assert_eq!(status.spent, 180.0);
        assert_eq!(status.remaining, 620.0);
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let service = create_test_service();
        let totals = service.category_totals();

        let categories: Vec<_> = totals.iter().map(|t| t.category).collect();
        assert_eq!(categories, vec![ExpenseCategory::Food, ExpenseCategory::Transport, ExpenseCategory::Books]);
        assert_eq!(totals[0].amount, 35.0);
        assert_eq!(totals[1].amount, 60.0);
        assert_eq!(totals[2].amount, 85.0);
    }

    #[test]
    fn test_category_totals_sum_matches_total_for_any_order() {
        let mut expenses = fixtures::expenses();
        expenses.reverse();
        let reversed = ExpenseService::with_expenses(expenses, 800.0, "$");

        let sum: f64 = reversed.category_totals().iter().map(|t| t.amount).sum();
        assert_eq!(sum, reversed.total_spent());
        assert_eq!(reversed.category_totals()[0].category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_add_expense_prepends() {
        let mut service = create_test_service();
        let added = service
            .add_expense_on(request("Movie ticket", "12.00", Some(ExpenseCategory::Entertainment)), nov_8(), 1_000)
            .expect("Failed to add expense");

        assert_eq!(service.expenses().len(), 7);
        assert_eq!(service.expenses()[0], added);
        assert_eq!(added.date, "Nov 8");
        assert_eq!(added.amount, 12.0);
        assert_eq!(service.budget_status().spent, 192.0);
    }

    #[test]
    fn test_add_expense_ids_unique() {
        let mut service = create_test_service();
        let first = service
            .add_expense_on(request("Snack", "2", Some(ExpenseCategory::Food)), nov_8(), 5_000)
            .unwrap();
        let second = service
            .add_expense_on(request("Snack", "2", Some(ExpenseCategory::Food)), nov_8(), 5_000)
            .unwrap();

        assert_ne!(first.id, second.id);
        let mut ids: Vec<_> = service.expenses().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), service.expenses().len());
    }

    #[test]
    fn test_add_expense_rejects_missing_fields() {
        let mut service = create_test_service();
        let before = service.expenses().to_vec();

        assert_eq!(
            service.add_expense_on(request("", "5", Some(ExpenseCategory::Food)), nov_8(), 1),
            Err(ExpenseValidationError::EmptyItem)
        );
        assert_eq!(
            service.add_expense_on(request("Tea", "", Some(ExpenseCategory::Food)), nov_8(), 1),
            Err(ExpenseValidationError::EmptyAmount)
        );
        assert_eq!(
            service.add_expense_on(request("Tea", "5", None), nov_8(), 1),
            Err(ExpenseValidationError::MissingCategory)
        );
        assert!(service
            .add_expense_on(request("Tea", "five", Some(ExpenseCategory::Food)), nov_8(), 1)
            .is_err());
        assert_eq!(
            service.add_expense_on(request("Tea", "-1", Some(ExpenseCategory::Food)), nov_8(), 1),
            Err(ExpenseValidationError::NonPositiveAmount)
        );

        assert_eq!(service.expenses(), before.as_slice());
    }

    #[test]
    fn test_item_is_trimmed() {
        let mut service = create_test_service();

        assert_eq!(
            service.add_expense_on(request("   ", "5", Some(ExpenseCategory::Food)), nov_8(), 1),
            Err(ExpenseValidationError::EmptyItem)
        );
        let added = service
            .add_expense_on(request("  Bagel ", "3", Some(ExpenseCategory::Food)), nov_8(), 1)
            .unwrap();
        assert_eq!(added.item, "Bagel");
    }

    #[test]
    fn test_malformed_amount_leaves_budget_untouched() {
        let mut service = create_test_service();

        for amount in ["12,50", "12$50", "1 2"] {
            assert!(matches!(
                service.add_expense_on(request("Lunch", amount, Some(ExpenseCategory::Food)), nov_8(), 1),
                Err(ExpenseValidationError::InvalidAmount(_))
            ));
        }

        assert_eq!(service.expenses().len(), 6);
        assert_eq!(service.budget_status().spent, 180.0);
    }

    #[test]
    fn test_overspending_goes_negative() {
        let mut service = ExpenseService::with_expenses(Vec::new(), 100.0, "$");
        service
            .add_expense_on(request("Laptop", "$1,000", Some(ExpenseCategory::Other)), nov_8(), 1)
            .unwrap();

        let status = service.budget_status();
        assert_eq!(status.spent, 1000.0);
        assert_eq!(status.remaining, -900.0);
        assert!(status.is_over_budget());
    }

    #[test]
    fn test_summary() {
        let service = create_test_service();
        let summary = service.summary();

        assert_eq!(summary.total, 180.0);
        assert_eq!(summary.by_category.len(), 3);
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()), "Jan 3");
        assert_eq!(format_display_date(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()), "Dec 25");
    }
}
