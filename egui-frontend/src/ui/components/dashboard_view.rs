//! # Dashboard View
//!
//! Day-at-a-glance screen: greeting, today's classes, assignments, events, and
//! an "Others" section holding the budget card, wellness progress and gym row.

use eframe::egui;

use crate::backend::domain::DashboardEntry;
use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::{badge_color, colors};
use crate::ui::components::ui_components::{badge, card, page_header, section_header, title_and_detail};
use crate::ui::state::{SectionKey, SectionVisibility};

fn draw_entries(ui: &mut egui::Ui, entries: &[DashboardEntry]) {
    for entry in entries {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                title_and_detail(ui, &entry.title, &entry.detail);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, entry.badge.label(), badge_color(entry.badge));
                });
            });
        });
    }
}

fn draw_entry_section(
    ui: &mut egui::Ui,
    sections: &mut SectionVisibility,
    key: SectionKey,
    title: &str,
    entries: &[DashboardEntry],
) {
    if section_header(ui, sections, key, title, Some(entries.len())) {
        draw_entries(ui, entries);
    }
    ui.add_space(6.0);
}

impl CollegeLifeApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let dashboard = &self.backend.dashboard_service;
        let sections = &mut self.sections;

        page_header(ui, "Dashboard", &dashboard.greeting());

        draw_entry_section(ui, sections, SectionKey::DashboardClasses, "Today's Classes", dashboard.classes());
        draw_entry_section(ui, sections, SectionKey::DashboardAssignments, "Assignments", dashboard.assignments());
        draw_entry_section(ui, sections, SectionKey::DashboardEvents, "Events", dashboard.events());

        if section_header(ui, sections, SectionKey::DashboardOthers, "Others", Some(dashboard.others_count())) {
            let summary = dashboard.budget_summary(&self.backend.expense_service);
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("💰 Budget").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if summary.on_track {
                            badge(ui, "On Track", colors::SUCCESS);
                        } else {
                            badge(ui, "Over Budget", colors::DANGER);
                        }
                    });
                });
                ui.label(format!(
                    "{} of {} spent",
                    self.config.format_amount(summary.status.spent),
                    self.config.format_amount(summary.status.budget)
                ));
                let fraction = (summary.status.spent_percentage() / 100.0).clamp(0.0, 1.0) as f32;
                ui.add(egui::ProgressBar::new(fraction).show_percentage());
                ui.label(
                    egui::RichText::new(format!("{} remaining", self.config.format_amount(summary.status.remaining)))
                        .small()
                        .color(colors::MUTED),
                );
            });

            let wellness = dashboard.wellness();
            card(ui, |ui| {
                ui.label(egui::RichText::new(format!("🌿 {}", wellness.label)).strong());
                ui.add(egui::ProgressBar::new(f32::from(wellness.progress) / 100.0).show_percentage());
            });

            draw_entries(ui, dashboard.others());
        }
    }
}
