//! # Budget View
//!
//! Monthly budget overview, spending by category and the transaction list,
//! newest first.

use eframe::egui;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::{colors, expense_category_color, expense_category_icon};
use crate::ui::components::ui_components::{card, page_header, section_header, title_and_detail};
use crate::ui::state::{CreationModal, SectionKey};

impl CollegeLifeApp {
    pub fn render_budget(&mut self, ui: &mut egui::Ui) {
        let expenses = &self.backend.expense_service;
        let config = &self.config;
        let status = expenses.budget_status();

        page_header(ui, "Budget", "Track your monthly spending");

        card(ui, |ui| {
            ui.label(egui::RichText::new("Monthly Budget").color(colors::MUTED));
            ui.label(egui::RichText::new(config.format_amount(status.budget)).size(24.0).strong());
            ui.columns(2, |columns| {
                columns[0].label(egui::RichText::new("Spent").small().color(colors::MUTED));
                columns[0].label(egui::RichText::new(config.format_amount(status.spent)).strong());
                let remaining_color = if status.is_over_budget() { colors::DANGER } else { colors::SUCCESS };
                columns[1].label(egui::RichText::new("Remaining").small().color(colors::MUTED));
                columns[1].label(
                    egui::RichText::new(config.format_amount(status.remaining))
                        .strong()
                        .color(remaining_color),
                );
            });
            let fraction = (status.spent_percentage() / 100.0).clamp(0.0, 1.0) as f32;
            ui.add(egui::ProgressBar::new(fraction).text(format!("{:.0}% used", status.spent_percentage())));
        });

        ui.add_space(6.0);
        ui.columns(2, |columns| {
            card(&mut columns[0], |ui| {
                title_and_detail(ui, "This Week", &config.format_amount(status.this_week_estimate()));
            });
            card(&mut columns[1], |ui| {
                title_and_detail(ui, "Saved", &config.format_amount(status.remaining));
            });
        });

        ui.add_space(6.0);
        let mut open_dialog = false;
        if ui.button("➕ Add Expense").clicked() {
            open_dialog = true;
        }
        ui.add_space(6.0);

        let totals = expenses.category_totals();
        if section_header(ui, &mut self.sections, SectionKey::BudgetCategories, "Spending by Category", Some(totals.len())) {
            for total in &totals {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                expense_category_icon(total.category),
                                total.category.label()
                            ))
                            .color(expense_category_color(total.category)),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(config.format_amount(total.amount)).strong());
                        });
                    });
                    let share = if status.spent > 0.0 { (total.amount / status.spent) as f32 } else { 0.0 };
                    ui.add(egui::ProgressBar::new(share).desired_height(6.0));
                });
            }
        }
        ui.add_space(6.0);

        if section_header(
            ui,
            &mut self.sections,
            SectionKey::BudgetTransactions,
            "Recent Transactions",
            Some(expenses.expenses().len()),
        ) {
            for expense in expenses.expenses() {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(expense_category_icon(expense.category));
                        title_and_detail(ui, &expense.item, &format!("{} • {}", expense.category.label(), expense.date));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!("-{}", config.format_amount(expense.amount)))
                                    .color(colors::DANGER)
                                    .strong(),
                            );
                        });
                    });
                });
            }
        }

        if open_dialog {
            self.modals.show(CreationModal::Expense);
        }
    }
}
