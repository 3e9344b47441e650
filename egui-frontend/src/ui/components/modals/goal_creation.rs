//! # Goal Creation Modal
//!
//! This module provides the goal creation modal interface, allowing users to set up
//! new career goals with a deadline, category and status.
//!
//! ## Purpose:
//! Title and deadline are required. A rejected submit keeps the dialog open
//! with everything typed so far.

use eframe::egui;
use shared::{GoalCategory, GoalStatus};

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::modals::shared::{labelled_text_field, show_modal_frame};
use crate::ui::components::theme::goal_category_icon;
use crate::ui::state::CreationModal;

impl CollegeLifeApp {
    /// Render the goal creation modal
    pub fn render_goal_creation_modal(&mut self, ctx: &egui::Context) {
        let form = &mut self.modals.goal_form;

        let outcome = show_modal_frame(ctx, "goal_creation_modal", "🎯 Add Career Goal", "Add Goal", |ui| {
            labelled_text_field(ui, "Title", &mut form.title, "e.g., Apply to Acme internship");

            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut form.description)
                    .hint_text("Optional details")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            labelled_text_field(ui, "Deadline", &mut form.deadline, "YYYY-MM-DD");

            ui.label("Category");
            egui::ComboBox::from_id_salt("goal_category")
                .selected_text(format!("{} {}", goal_category_icon(form.category), form.category.label()))
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for category in GoalCategory::ALL {
                        let text = format!("{} {}", goal_category_icon(category), category.label());
                        ui.selectable_value(&mut form.category, category, text);
                    }
                });
            ui.add_space(6.0);

            ui.label("Status");
            ui.horizontal(|ui| {
                for status in GoalStatus::ALL {
                    let text = match status {
                        GoalStatus::Current => "Current",
                        GoalStatus::Pending => "Pending",
                    };
                    ui.selectable_value(&mut form.status, status, text);
                }
            });
        });

        self.finish_modal(CreationModal::Goal, outcome);
    }
}
