//! # UI Components Module
//!
//! Reusable drawing helpers shared by every screen.
//!
//! ## Key Functions:
//! - `page_header()` - Screen title with a subtitle line
//! - `section_header()` - Clickable header for a collapsible section
//! - `card()` - Rounded container for one record
//! - `badge()` - Small colored label
//!
//! These are free functions over the pieces of state they touch, so a view can
//! hold a service borrow while it toggles a section.

use eframe::egui;

use crate::ui::components::theme::colors;
use crate::ui::state::{SectionKey, SectionVisibility};

/// Screen title plus a muted subtitle
pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new(title).strong());
    ui.label(egui::RichText::new(subtitle).color(colors::MUTED));
    ui.add_space(8.0);
}

/// Draw a collapsible section header; returns whether the section is open
pub fn section_header(
    ui: &mut egui::Ui,
    sections: &mut SectionVisibility,
    key: SectionKey,
    title: &str,
    count: Option<usize>,
) -> bool {
    let arrow = if sections.is_open(key) { "▼" } else { "▶" };
    let text = match count {
        Some(count) => format!("{} {} ({})", arrow, title, count),
        None => format!("{} {}", arrow, title),
    };

    let response = ui.add(egui::Button::new(egui::RichText::new(text).strong().size(16.0)).frame(false));
    if response.clicked() {
        sections.toggle(key);
    }

    sections.is_open(key)
}

/// Rounded full-width container
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(format!(" {} ", text))
            .small()
            .color(egui::Color32::WHITE)
            .background_color(color),
    );
}

/// Title line with a muted detail line underneath
pub fn title_and_detail(ui: &mut egui::Ui, title: &str, detail: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).strong());
        ui.label(egui::RichText::new(detail).small().color(colors::MUTED));
    });
}

/// Empty-state line for sections with nothing in them
pub fn empty_hint(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).italics().color(colors::MUTED));
}
