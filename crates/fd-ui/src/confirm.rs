use egui::{Align2, Context, RichText};

use crate::theme::error_color;

/// Yes/no dialog; `Some(true)` on confirm, `Some(false)` on dismissal
pub fn confirm_dialog(ctx: &Context, message: &str) -> Option<bool> {
    let mut answer = None;
    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Delete").color(error_color())).clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    answer = Some(false);
                }
            });
        });
    answer
}
