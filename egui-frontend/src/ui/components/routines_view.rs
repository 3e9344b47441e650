//! # Routines View
//!
//! Weekly schedule: one collapsible section per weekday, today's highlighted,
//! with a delete button on each routine row and an "Add Routine" dialog.

use eframe::egui;

use crate::backend::domain::RoutineService;
use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::{colors, routine_category_color};
use crate::ui::components::ui_components::{badge, card, empty_hint, page_header, section_header, title_and_detail};
use crate::ui::state::{CreationModal, SectionKey};

impl CollegeLifeApp {
    pub fn render_routines(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Weekly Routines", "Your recurring schedule");

        if ui.button("➕ Add Routine").clicked() {
            self.modals.show(CreationModal::Routine);
        }
        ui.add_space(8.0);

        let today = RoutineService::today_label();
        let mut delete_id = None;

        for (day, routines) in self.backend.routine_service.week() {
            let title = if day == today {
                format!("{} (Today)", day.full_name())
            } else {
                day.full_name().to_string()
            };

            let frame = if day == today {
                egui::Frame::default().fill(colors::TODAY_HIGHLIGHT).corner_radius(egui::CornerRadius::same(8))
            } else {
                egui::Frame::default()
            };

            frame.inner_margin(egui::Margin::same(4)).show(ui, |ui| {
                if !section_header(ui, &mut self.sections, SectionKey::RoutineDay(day), &title, Some(routines.len())) {
                    return;
                }

                if routines.is_empty() {
                    empty_hint(ui, "Nothing scheduled");
                }

                for routine in &routines {
                    card(ui, |ui| {
                        ui.horizontal(|ui| {
                            title_and_detail(ui, &routine.title, &routine.time);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("🗑").on_hover_text("Delete routine").clicked() {
                                    delete_id = Some(routine.id);
                                }
                                badge(ui, routine.category.label(), routine_category_color(routine.category));
                            });
                        });
                    });
                }
            });
        }

        if let Some(id) = delete_id {
            self.backend.routine_service.delete_routine(id);
        }
    }
}
