use egui::{Button, RichText, Ui};
use fd_data::{PageButton, PaginationPlan};

use crate::theme::accent_color;
use crate::{Intents, ViewIntent};

/// Previous/next, numbered pages and the range summary
pub fn pagination_bar(ui: &mut Ui, plan: &PaginationPlan, intents: &mut Intents) {
    ui.horizontal(|ui| {
        if let Some(summary) = plan.summary {
            ui.label(RichText::new(summary.to_string()).weak());
        }
        if plan.is_trivial() {
            return;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right to left, so the buttons are added in reverse
            if ui.add_enabled(plan.next_enabled, Button::new("›")).clicked() {
                if let Some(page) = plan.next_page() {
                    intents.push(ViewIntent::Page(page));
                }
            }
            for button in plan.buttons.iter().rev() {
                match *button {
                    PageButton::Page { number, current } => {
                        let text = RichText::new(number.to_string());
                        let text = if current { text.strong().color(accent_color()) } else { text };
                        if ui.add(Button::new(text).selected(current)).clicked() && !current {
                            intents.push(ViewIntent::Page(number));
                        }
                    }
                    PageButton::Ellipsis => {
                        ui.label("…");
                    }
                }
            }
            if ui.add_enabled(plan.prev_enabled, Button::new("‹")).clicked() {
                if let Some(page) = plan.prev_page() {
                    intents.push(ViewIntent::Page(page));
                }
            }
        });
    });
}
