//! Modal create/edit form

use egui::{Align2, ComboBox, Context, Grid, RichText, TextEdit, Ui};
use fd_data::{FieldKind, FieldSpec};
use fd_views::{FormMode, FormRequest};

use crate::theme::error_color;

/// What the user did with the form this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Submit,
    Cancel,
}

/// Paint `request` as a modal window, editing its draft in place
pub fn form_window(ctx: &Context, request: &mut FormRequest) -> Option<FormOutcome> {
    let mut outcome = None;
    let editing = matches!(request.mode, FormMode::Edit(_));
    let fields: Vec<&'static FieldSpec> = request.fields().collect();

    egui::Window::new(request.title.clone())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            Grid::new(("form", request.kind.as_str()))
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in &fields {
                        let label = if field.required {
                            RichText::new(format!("{} *", field.label))
                        } else {
                            RichText::new(field.label)
                        };
                        ui.label(label);
                        let enabled = !editing || field.editable;
                        ui.add_enabled_ui(enabled, |ui| field_input(ui, request, field));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.label(RichText::new("* required").small().color(error_color()));
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    outcome = Some(FormOutcome::Submit);
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    outcome = Some(FormOutcome::Cancel);
                }
            });
        });

    outcome
}

fn field_input(ui: &mut Ui, request: &mut FormRequest, field: &FieldSpec) {
    let kind = request.kind;
    let value = request.draft.entry(field.name.to_string()).or_default();
    match field.kind {
        FieldKind::Choice(options) => {
            let selected = if value.is_empty() { "Select…".to_string() } else { value.clone() };
            ComboBox::from_id_source((kind.as_str(), field.name))
                .selected_text(selected)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(value, option.to_string(), *option);
                    }
                });
        }
        FieldKind::Integer { .. } => {
            ui.add(TextEdit::singleline(value).desired_width(120.0));
        }
        FieldKind::Text | FieldKind::Derived => {
            ui.add(TextEdit::singleline(value).desired_width(220.0));
        }
    }
}
