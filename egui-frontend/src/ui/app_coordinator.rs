//! # App Coordinator Module
//!
//! The primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop (implements eframe::App trait)
//! - `sync_theme()` - Push dark mode and font size to egui when they change
//!
//! ## Application Flow:
//! 1. Apply theme if dark mode or font size changed
//! 2. Handle global input (ESC closes dialogs)
//! 3. Render the bottom tab bar
//! 4. Render the selected screen
//! 5. Render any active creation dialog
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::styling::apply_theme;

impl eframe::App for CollegeLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        // Handle ESC key to close dialogs
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.modals.active_modal.is_some() {
            log::debug!("⎋ ESC pressed, closing dialog");
            self.modals.hide_all_modals();
        }

        egui::TopBottomPanel::bottom("tab_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.draw_tab_bar(ui);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(self.shell.current_view)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_main_content(ui);
                    ui.add_space(20.0);
                });
        });

        // Render modals
        self.render_modals(ctx);
    }
}

impl CollegeLifeApp {
    /// Apply theme settings, only touching the context when they changed
    fn sync_theme(&mut self, ctx: &egui::Context) {
        let wanted = (self.shell.dark_mode, self.backend.settings_service.font_size());
        if self.applied_theme != Some(wanted) {
            apply_theme(ctx, wanted.0, wanted.1);
            self.applied_theme = Some(wanted);
        }
    }
}
