//! eframe application wrapping the session

use std::time::Instant;

use fd_core::ActiveView;
use fd_data::DashboardConfig;
use fd_ui::{FormOutcome, Intents, Theme};
use tracing::info;

use crate::host::DialogSink;
use crate::session::Session;

pub struct AdminApp {
    session: Session,
    sink: DialogSink,
}

impl AdminApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session, config: &DashboardConfig) -> Self {
        fd_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        info!("dashboard window created");
        Self {
            session,
            sink: DialogSink {
                start_dir: config.export_dir.clone(),
            },
        }
    }

    fn content(&mut self, ui: &mut egui::Ui, intents: &mut Intents) {
        match self.session.navigator.active_view() {
            ActiveView::Dashboard => {
                let overview = self.session.overview();
                egui::ScrollArea::vertical().show(ui, |ui| fd_ui::dashboard_view(ui, &overview));
            }
            ActiveView::Entity(_) => {
                if self.session.view.is_none() {
                    self.session.rerender();
                }
                let Some(view) = &self.session.view else {
                    return;
                };
                ui.heading(view.title);
                ui.add_space(4.0);
                fd_ui::toolbar(ui, view, &mut self.session.search, intents);
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| fd_ui::grid_view(ui, view, intents));
                ui.separator();
                fd_ui::pagination_bar(ui, &view.pagination, intents);
            }
        }
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.tick(now);

        let mut intents = Intents::new();
        fd_ui::main_tabs(ctx, &self.session.navigator, &mut intents);
        fd_ui::sub_tabs(ctx, &self.session.navigator, &mut intents);

        egui::CentralPanel::default().show(ctx, |ui| self.content(ui, &mut intents));

        if let Some(form) = self.session.host.form.as_mut() {
            match fd_ui::form_window(ctx, form) {
                Some(FormOutcome::Submit) => self.session.submit_form(),
                Some(FormOutcome::Cancel) => self.session.cancel_form(),
                None => {}
            }
        }
        if let Some((message, _)) = &self.session.host.confirm {
            if let Some(answer) = fd_ui::confirm_dialog(ctx, message) {
                self.session.answer_confirm(answer);
            }
        }
        fd_ui::toast_stack(ctx, &mut self.session.host.notifications);

        let today = chrono::Utc::now().date_naive();
        for intent in intents {
            self.session.apply(intent, now, today, &mut self.sink);
        }
        if let Some(wait) = self.session.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
