//! # Expense Creation Modal
//!
//! Item, amount and category for a new expense.

use eframe::egui;
use shared::ExpenseCategory;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::modals::shared::{labelled_text_field, show_modal_frame};
use crate::ui::components::theme::expense_category_icon;
use crate::ui::state::CreationModal;

impl CollegeLifeApp {
    pub fn render_expense_creation_modal(&mut self, ctx: &egui::Context) {
        let form = &mut self.modals.expense_form;
        let amount_hint = format!("{}0.00", self.config.currency_symbol);

        let outcome = show_modal_frame(ctx, "expense_creation_modal", "💸 Add Expense", "Add Expense", |ui| {
            labelled_text_field(ui, "Item", &mut form.item, "e.g., Lunch, Bus pass...");
            labelled_text_field(ui, "Amount", &mut form.amount, &amount_hint);

            ui.label("Category");
            let selected_text = form
                .category
                .map(|c| format!("{} {}", expense_category_icon(c), c.label()))
                .unwrap_or_else(|| "Select category".to_string());
            egui::ComboBox::from_id_salt("expense_category")
                .selected_text(selected_text)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for category in ExpenseCategory::ALL {
                        let text = format!("{} {}", expense_category_icon(category), category.label());
                        ui.selectable_value(&mut form.category, Some(category), text);
                    }
                });
        });

        self.finish_modal(CreationModal::Expense, outcome);
    }
}
