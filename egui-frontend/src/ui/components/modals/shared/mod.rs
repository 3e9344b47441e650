//! # Shared Modal Utilities
//!
//! Common modal functionality shared across the creation dialogs.
//!
//! ## Purpose:
//! - Dim the screen behind the active dialog
//! - Draw the dialog card with a title and Cancel/confirm buttons
//! - Route to whichever dialog `ModalState` says is active

use eframe::egui;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::colors;
use crate::ui::state::CreationModal;

/// What the user did with a dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Open,
    Submit,
    Cancel,
}

/// Draw a centered dialog over a dimmed backdrop
pub fn show_modal_frame(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    confirm_label: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> ModalOutcome {
    ctx.layer_painter(egui::LayerId::new(egui::Order::Middle, egui::Id::new((id, "backdrop"))))
        .rect_filled(ctx.screen_rect(), egui::CornerRadius::ZERO, colors::MODAL_DIM);

    let mut outcome = ModalOutcome::Open;

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .corner_radius(egui::CornerRadius::same(15))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(360.0);

                    ui.label(egui::RichText::new(title).size(20.0).strong());
                    ui.add_space(12.0);

                    add_contents(ui);

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            outcome = ModalOutcome::Cancel;
                        }
                        let confirm = egui::Button::new(egui::RichText::new(confirm_label).color(egui::Color32::WHITE))
                            .fill(colors::ACCENT);
                        if ui.add(confirm).clicked() {
                            outcome = ModalOutcome::Submit;
                        }
                    });
                });
        });

    outcome
}

/// Labelled single-line text field
pub fn labelled_text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
}

impl CollegeLifeApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        match self.modals.active_modal {
            Some(CreationModal::Expense) => self.render_expense_creation_modal(ctx),
            Some(CreationModal::Goal) => self.render_goal_creation_modal(ctx),
            Some(CreationModal::Routine) => self.render_routine_creation_modal(ctx),
            None => {}
        }
    }

    /// Apply a dialog outcome through the matching submit handler
    pub(crate) fn finish_modal(&mut self, modal: CreationModal, outcome: ModalOutcome) {
        match outcome {
            ModalOutcome::Open => {}
            ModalOutcome::Cancel => self.modals.hide_all_modals(),
            ModalOutcome::Submit => {
                match modal {
                    CreationModal::Expense => self.submit_expense(),
                    CreationModal::Goal => self.submit_goal(),
                    CreationModal::Routine => self.submit_routine(),
                };
            }
        }
    }
}
