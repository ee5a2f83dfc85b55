//! Search box, filter dropdowns and the add/export buttons

use egui::{ComboBox, TextEdit, Ui};
use fd_views::grid::FilterControl;
use fd_views::RenderedView;

use crate::{Intents, ViewIntent};

/// Text typed into the search box, ahead of the debounced view state
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub text: String,
}

impl SearchBox {
    /// Show the term the view was rendered with, e.g. after a tab switch
    pub fn reset(&mut self, term: &str) {
        self.text.clear();
        self.text.push_str(term);
    }
}

pub fn toolbar(ui: &mut Ui, view: &RenderedView, search: &mut SearchBox, intents: &mut Intents) {
    ui.horizontal(|ui| {
        let edit = TextEdit::singleline(&mut search.text)
            .hint_text(format!("Search {}…", view.title.to_lowercase()))
            .desired_width(240.0);
        if ui.add(edit).changed() {
            intents.push(ViewIntent::Search(search.text.clone()));
        }

        for control in &view.filters {
            filter_combo(ui, view, control, intents);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⬇ Export CSV").clicked() {
                intents.push(ViewIntent::Export);
            }
            if view.actions.create && ui.button("＋ Add").clicked() {
                intents.push(ViewIntent::Create);
            }
        });
    });
}

fn filter_combo(ui: &mut Ui, view: &RenderedView, control: &FilterControl, intents: &mut Intents) {
    let selected_text = control.selected.as_deref().unwrap_or(control.all_label);
    ComboBox::from_id_source((view.kind.as_str(), control.field))
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(control.selected.is_none(), control.all_label)
                .clicked()
                && control.selected.is_some()
            {
                intents.push(ViewIntent::Filter {
                    field: control.field,
                    value: None,
                });
            }
            for option in control.options {
                let current = control.selected.as_deref() == Some(*option);
                if ui.selectable_label(current, *option).clicked() && !current {
                    intents.push(ViewIntent::Filter {
                        field: control.field,
                        value: Some(option.to_string()),
                    });
                }
            }
        });
}
