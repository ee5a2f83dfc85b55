//! Notification stack in the top-right corner

use egui::{Align2, Context, Frame, Order, RichText};
use fd_core::NotificationCenter;

use crate::theme::severity_color;

/// Paint live notifications, newest on top; a click dismisses one
pub fn toast_stack(ctx: &Context, center: &mut NotificationCenter) {
    if center.active().is_empty() {
        return;
    }
    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            for note in center.active().iter().rev() {
                let color = severity_color(note.severity);
                let response = Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, color))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new(&note.message).color(color));
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    dismissed = Some(note.id);
                }
                ui.add_space(6.0);
            }
        });
    if let Some(id) = dismissed {
        center.dismiss(id);
    }
}
