//! Table and card-grid painters for a rendered entity view

use egui::{Align, Frame, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use fd_core::ViewLayout;
use fd_views::grid::{Cell, HeaderCell, RenderedRow};
use fd_views::{RenderedView, StatCard};

use crate::theme::{accent_color, tone_color};
use crate::{Intents, ViewIntent};

const ROW_HEIGHT: f32 = 24.0;
const CARD_WIDTH: f32 = 220.0;

/// Stats strip, then the rows as a table or cards, or the empty message
pub fn grid_view(ui: &mut Ui, view: &RenderedView, intents: &mut Intents) {
    if !view.stats.is_empty() {
        stats_strip(ui, &view.stats);
        ui.add_space(8.0);
    }

    if let Some(message) = &view.empty_message {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).weak().size(16.0));
        });
        ui.add_space(24.0);
        return;
    }

    match view.layout {
        ViewLayout::Table => table(ui, view, intents),
        ViewLayout::Cards => cards(ui, view, intents),
    }
}

fn stats_strip(ui: &mut Ui, stats: &[StatCard]) {
    ui.horizontal_wrapped(|ui| {
        for card in stats {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(140.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(card.label).small().weak());
                    let value = RichText::new(&card.value).heading();
                    ui.label(match card.tone {
                        Some(tone) => value.color(tone_color(tone)),
                        None => value,
                    });
                });
            });
        }
    });
}

fn cell_text(cell: &Cell) -> RichText {
    let text = RichText::new(&cell.text);
    match cell.tone {
        Some(tone) => text.color(tone_color(tone)),
        None => text,
    }
}

fn header_button(ui: &mut Ui, header: &HeaderCell, intents: &mut Intents) {
    if !header.sortable {
        ui.strong(header.label);
        return;
    }
    let text = RichText::new(header.text()).strong();
    let text = if header.sort.is_some() { text.color(accent_color()) } else { text };
    if ui.add(egui::Label::new(text).sense(egui::Sense::click())).on_hover_text("Sort").clicked() {
        intents.push(ViewIntent::Sort(header.field));
    }
}

fn row_actions(ui: &mut Ui, view: &RenderedView, row: &RenderedRow, intents: &mut Intents) {
    let Some(identity) = &row.identity else {
        return;
    };
    if view.actions.edit && ui.small_button("✏ Edit").clicked() {
        intents.push(ViewIntent::Edit(identity.clone()));
    }
    if view.actions.delete && ui.small_button("🗑 Delete").clicked() {
        intents.push(ViewIntent::Delete(identity.clone()));
    }
}

fn table(ui: &mut Ui, view: &RenderedView, intents: &mut Intents) {
    let with_actions = view.actions.edit || view.actions.delete;
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for _ in &view.headers {
        builder = builder.column(Column::auto().at_least(70.0).clip(true));
    }
    if with_actions {
        builder = builder.column(Column::remainder().at_least(120.0));
    }

    builder
        .header(ROW_HEIGHT, |mut header| {
            for cell in &view.headers {
                header.col(|ui| header_button(ui, cell, intents));
            }
            if with_actions {
                header.col(|ui| {
                    ui.strong("Actions");
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.rows.len(), |row_index, mut row| {
                let rendered = &view.rows[row_index];
                for cell in &rendered.cells {
                    row.col(|ui| {
                        ui.label(cell_text(cell));
                    });
                }
                if with_actions {
                    row.col(|ui| row_actions(ui, view, rendered, intents));
                }
            });
        });
}

/// Card grid: the first cell is the title, the rest are labelled lines
fn cards(ui: &mut Ui, view: &RenderedView, intents: &mut Intents) {
    let sortable: Vec<&HeaderCell> = view.headers.iter().filter(|h| h.sortable).collect();
    if !sortable.is_empty() {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Sort by").weak());
            for header in sortable {
                header_button(ui, header, intents);
            }
        });
        ui.add_space(6.0);
    }

    ui.horizontal_wrapped(|ui| {
        for row in &view.rows {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    let mut cells = view.headers.iter().zip(&row.cells);
                    if let Some((_, title)) = cells.next() {
                        ui.label(cell_text(title).strong().size(16.0));
                    }
                    for (header, cell) in cells {
                        if cell.text.is_empty() {
                            continue;
                        }
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(header.label).small().weak());
                            ui.label(cell_text(cell));
                        });
                    }
                    ui.horizontal(|ui| row_actions(ui, view, row, intents));
                });
            });
        }
    });
}
