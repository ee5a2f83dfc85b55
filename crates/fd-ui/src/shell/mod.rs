use egui::{Context, RichText, TopBottomPanel};
use fd_core::{MainTab, Navigator};

use crate::theme::accent_color;
use crate::{Intents, ViewIntent};

/// Title strip with the top-level tabs
pub fn main_tabs(ctx: &Context, navigator: &Navigator, intents: &mut Intents) {
    TopBottomPanel::top("main_tabs").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("🍔 Fast Food Admin").heading().color(accent_color()));
            ui.add_space(16.0);
            for tab in MainTab::ALL {
                let selected = navigator.main_tab() == tab;
                if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                    intents.push(ViewIntent::SwitchMain(tab));
                }
            }
        });
        ui.add_space(4.0);
    });
}

/// Sub-tab row of the active main tab; hidden when it has a single view
pub fn sub_tabs(ctx: &Context, navigator: &Navigator, intents: &mut Intents) {
    let tabs = navigator.main_tab().sub_tabs();
    if tabs.len() < 2 {
        return;
    }
    TopBottomPanel::top("sub_tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for kind in tabs {
                let selected = navigator.sub_tab() == Some(*kind);
                if ui.selectable_label(selected, kind.label()).clicked() && !selected {
                    intents.push(ViewIntent::SwitchSub(*kind));
                }
            }
        });
    });
}
