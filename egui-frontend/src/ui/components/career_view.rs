//! # Career View
//!
//! Career goals grouped by category, each category split into current and
//! pending goals. Goals can be marked complete and have their progress set
//! with a slider; the slider is locked once a goal is complete.

use eframe::egui;
use shared::{Goal, GoalStatus};

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::{colors, goal_category_icon};
use crate::ui::components::ui_components::{card, empty_hint, page_header, section_header};
use crate::ui::state::{CreationModal, SectionKey};

/// Goal changes made during this frame
enum GoalAction {
    ToggleComplete(u64),
    SetProgress(u64, u8),
}

fn draw_goal(ui: &mut egui::Ui, goal: &Goal, actions: &mut Vec<GoalAction>) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            let mark = if goal.completed { "☑" } else { "☐" };
            if ui.small_button(mark).on_hover_text("Mark complete").clicked() {
                actions.push(GoalAction::ToggleComplete(goal.id));
            }

            let title = egui::RichText::new(&goal.title).strong();
            ui.label(if goal.completed { title.strikethrough().color(colors::MUTED) } else { title });
        });

        if !goal.description.is_empty() {
            ui.label(egui::RichText::new(&goal.description).small().color(colors::MUTED));
        }
        ui.label(egui::RichText::new(format!("📅 Due {}", goal.deadline)).small().color(colors::MUTED));

        let mut progress = goal.progress;
        let slider = egui::Slider::new(&mut progress, 0..=100).suffix("%");
        if ui.add_enabled(!goal.completed, slider).changed() {
            actions.push(GoalAction::SetProgress(goal.id, progress));
        }
    });
}

impl CollegeLifeApp {
    pub fn render_career(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Career", "Track internships, applications and interviews");

        let goals = &self.backend.goal_service;
        let sections = &mut self.sections;
        let mut actions = Vec::new();

        card(ui, |ui| {
            ui.label(egui::RichText::new("Overall Progress").strong());
            ui.label(
                egui::RichText::new(format!("{} of {} goals completed", goals.completed_count(), goals.total_count()))
                    .color(colors::MUTED),
            );
            let fraction = (goals.overall_progress() / 100.0) as f32;
            ui.add(egui::ProgressBar::new(fraction).text(format!("{:.0}%", goals.overall_progress())));
        });

        ui.add_space(6.0);
        let add_clicked = ui.button("➕ Add Goal").clicked();
        ui.add_space(6.0);

        // partitions() yields category-then-status order, so each category's
        // two partitions arrive back to back
        let partitions = goals.partitions();
        for chunk in partitions.chunks(GoalStatus::ALL.len()) {
            let Some(first) = chunk.first() else { continue };
            let category = first.category;
            let count: usize = chunk.iter().map(|p| p.goals.len()).sum();
            let title = format!("{} {}", goal_category_icon(category), category.label());

            if section_header(ui, sections, SectionKey::CareerCategory(category), &title, Some(count)) {
                ui.indent(("career", category), |ui| {
                    for partition in chunk {
                        let key = SectionKey::CareerPartition(category, partition.status);
                        let status_title = match partition.status {
                            GoalStatus::Current => "Current",
                            GoalStatus::Pending => "Pending",
                        };
                        if section_header(ui, sections, key, status_title, Some(partition.goals.len())) {
                            if partition.goals.is_empty() {
                                empty_hint(ui, "No goals yet");
                            }
                            for goal in &partition.goals {
                                draw_goal(ui, goal, &mut actions);
                            }
                        }
                    }
                });
            }
            ui.add_space(6.0);
        }

        for action in actions {
            match action {
                GoalAction::ToggleComplete(id) => self.backend.goal_service.toggle_complete(id),
                GoalAction::SetProgress(id, value) => self.backend.goal_service.update_progress(id, value),
            }
        }

        if add_clicked {
            self.modals.show(CreationModal::Goal);
        }
    }
}
