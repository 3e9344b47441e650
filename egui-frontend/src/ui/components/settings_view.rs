//! # Settings View
//!
//! Profile card, appearance (dark mode and font size), notification switches,
//! and static privacy/help sections.

use eframe::egui;
use shared::{FontSize, NotificationSetting};

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{card, page_header, section_header, title_and_detail};
use crate::ui::state::SectionKey;

impl CollegeLifeApp {
    pub fn render_settings(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Settings", "Manage your preferences");

        let settings = &mut self.backend.settings_service;
        let sections = &mut self.sections;

        if section_header(ui, sections, SectionKey::SettingsProfile, "Profile", None) {
            let profile = settings.profile();
            card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(" {} ", profile.initials()))
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE)
                            .background_color(colors::ACCENT),
                    );
                    title_and_detail(ui, &profile.full_name, &profile.email);
                });
                let _ = ui.button("Edit Profile");
            });
        }
        ui.add_space(6.0);

        if section_header(ui, sections, SectionKey::SettingsAppearance, "Appearance", None) {
            card(ui, |ui| {
                let mut dark_mode = self.shell.dark_mode;
                if ui.checkbox(&mut dark_mode, "🌙 Dark Mode").changed() {
                    settings.set_dark_mode(&mut self.shell, dark_mode);
                }

                ui.add_space(4.0);
                ui.label("Font Size");
                ui.horizontal(|ui| {
                    let mut font_size = settings.font_size();
                    for size in FontSize::ALL {
                        ui.selectable_value(&mut font_size, size, size.label());
                    }
                    settings.set_font_size(font_size);
                });
            });
        }
        ui.add_space(6.0);

        if section_header(ui, sections, SectionKey::SettingsNotifications, "Notifications", None) {
            card(ui, |ui| {
                for setting in NotificationSetting::ALL {
                    ui.horizontal(|ui| {
                        title_and_detail(ui, setting.label(), setting.description());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut enabled = settings.is_enabled(setting);
                            if ui.checkbox(&mut enabled, "").changed() {
                                settings.toggle(setting);
                            }
                        });
                    });
                }
            });
        }
        ui.add_space(6.0);

        if section_header(ui, sections, SectionKey::SettingsPrivacy, "Privacy & Security", None) {
            card(ui, |ui| {
                let _ = ui.button("Change Password");
                let _ = ui.button("Privacy Settings");
                let _ = ui.button("Data & Storage");
            });
        }
        ui.add_space(6.0);

        if section_header(ui, sections, SectionKey::SettingsHelp, "Help & Support", None) {
            card(ui, |ui| {
                let _ = ui.button("Help Center");
                let _ = ui.button("Contact Support");
                let _ = ui.button("About");
                ui.label(egui::RichText::new("College Life v1.0.0").small().color(colors::MUTED));
            });
        }
    }
}
