//! # Tab Manager Module
//!
//! Content routing and the bottom tab bar.
//!
//! ## Key Functions:
//! - `render_main_content()` - Routes to the screen for the selected view
//! - `draw_tab_bar()` - Six-entry bottom navigation
//!
//! ## Tab Flow:
//! Clicking a tab updates `ShellState::current_view`; the next frame renders
//! the matching screen. Every screen is always reachable from the bar.

use eframe::egui;
use shared::ViewType;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::colors;

fn tab_icon(view: ViewType) -> &'static str {
    match view {
        ViewType::Dashboard => "🏠",
        ViewType::Routines => "📅",
        ViewType::Budget => "💰",
        ViewType::Social => "👥",
        ViewType::Career => "💼",
        ViewType::Settings => "⚙",
    }
}

impl CollegeLifeApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        match self.shell.current_view {
            ViewType::Dashboard => self.render_dashboard(ui),
            ViewType::Routines => self.render_routines(ui),
            ViewType::Budget => self.render_budget(ui),
            ViewType::Social => self.render_social(ui),
            ViewType::Career => self.render_career(ui),
            ViewType::Settings => self.render_settings(ui),
        }
    }

    /// Draw the bottom navigation bar
    pub fn draw_tab_bar(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;

        ui.columns(ViewType::ALL.len(), |columns| {
            for (column, view) in columns.iter_mut().zip(ViewType::ALL) {
                column.vertical_centered(|ui| {
                    let is_current = self.shell.current_view == view;
                    let color = if is_current { colors::ACCENT } else { colors::MUTED };
                    let text = egui::RichText::new(format!("{}\n{}", tab_icon(view), view.label()))
                        .color(color)
                        .size(12.0);

                    if ui.add(egui::Button::new(text).frame(false)).clicked() {
                        selected = Some(view);
                    }
                });
            }
        });

        if let Some(view) = selected {
            self.shell.select_view(view);
        }
    }
}
