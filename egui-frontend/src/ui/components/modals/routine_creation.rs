//! # Routine Creation Modal
//!
//! Title, time, weekdays and category for a new weekly routine.

use eframe::egui;
use shared::{DayLabel, RoutineCategory};

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::modals::shared::{labelled_text_field, show_modal_frame};
use crate::ui::state::CreationModal;

impl CollegeLifeApp {
    pub fn render_routine_creation_modal(&mut self, ctx: &egui::Context) {
        let modals = &mut self.modals;
        let mut toggled_day = None;

        let outcome = show_modal_frame(ctx, "routine_creation_modal", "📅 Add Routine", "Add Routine", |ui| {
            let form = &mut modals.routine_form;
            labelled_text_field(ui, "Title", &mut form.title, "e.g., Morning run");
            labelled_text_field(ui, "Time", &mut form.time, "e.g., 7:00 AM");

            ui.label("Days");
            ui.horizontal_wrapped(|ui| {
                for day in DayLabel::ALL {
                    if ui.selectable_label(form.days.contains(&day), day.label()).clicked() {
                        toggled_day = Some(day);
                    }
                }
            });
            ui.add_space(6.0);

            ui.label("Category");
            egui::ComboBox::from_id_salt("routine_category")
                .selected_text(form.category.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for category in RoutineCategory::ALL {
                        ui.selectable_value(&mut form.category, category, category.label());
                    }
                });
        });

        if let Some(day) = toggled_day {
            self.modals.toggle_routine_day(day);
        }
        self.finish_modal(CreationModal::Routine, outcome);
    }
}
