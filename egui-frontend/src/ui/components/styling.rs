//! # Styling Module
//!
//! Global egui styling for the college life planner.
//!
//! ## Key Functions:
//! - `apply_theme()` - Switch light/dark visuals and apply the font-size zoom
//! - `font_scale()` - Zoom factor for a font-size preference
//!
//! ## Purpose:
//! Dark mode and font size are the only two global appearance settings. They
//! are applied to the whole context, so individual views never pick colors for
//! the background or size their own text.

use eframe::egui;
use shared::FontSize;

/// Zoom factor used for each font-size preference
pub fn font_scale(font_size: FontSize) -> f32 {
    match font_size {
        FontSize::Small => 0.9,
        FontSize::Medium => 1.0,
        FontSize::Large => 1.15,
    }
}

/// Apply dark mode and font size to the whole context
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool, font_size: FontSize) {
    log::info!(
        "🎨 Applying {} theme at {} font size",
        if dark_mode { "dark" } else { "light" },
        font_size.label()
    );

    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });

    ctx.all_styles_mut(|style| {
        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
        style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
        style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
    });

    let scale = font_scale(font_size);
    if (ctx.zoom_factor() - scale).abs() > f32::EPSILON {
        ctx.set_zoom_factor(scale);
    }
}
