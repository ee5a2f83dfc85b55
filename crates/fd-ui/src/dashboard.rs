//! Dashboard tab: headline figures, best sellers and quick status

use egui::{Frame, ProgressBar, RichText, Ui};
use fd_views::DashboardOverview;

use crate::theme::{accent_color, tone_color, warning_color, success_color};

fn figure(ui: &mut Ui, label: &str, value: &str) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(170.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value).heading().color(accent_color()));
        });
    });
}

pub fn dashboard_view(ui: &mut Ui, overview: &DashboardOverview) {
    let alert_color = if overview.low_stock > 0 { warning_color() } else { success_color() };
    ui.label(RichText::new(overview.alert()).color(alert_color));
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        figure(ui, "Today's sales", &overview.today_sales);
        figure(ui, "Today's orders", &overview.today_orders);
        figure(ui, "Average order", &overview.average_order_value);
        figure(ui, "Active orders", &overview.active_orders.to_string());
        figure(ui, "Low stock items", &overview.low_stock.to_string());
        figure(ui, "Open complaints", &overview.open_complaints.to_string());
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        columns[0].heading("Top products");
        for product in &overview.top_products {
            columns[0].horizontal(|ui| {
                ui.label(RichText::new(format!("#{}", product.rank)).strong());
                ui.label(&product.name);
                ui.label(RichText::new(&product.sales).weak());
                ui.label(RichText::new(&product.revenue).color(accent_color()));
            });
            columns[0].add(ProgressBar::new(product.share).desired_width(260.0));
        }

        columns[1].heading("Quick status");
        for status in &overview.quick_status {
            columns[1].horizontal(|ui| {
                ui.label(status.label);
                ui.label(RichText::new(&status.value).strong());
            });
            columns[1].add(
                ProgressBar::new(status.fraction)
                    .desired_width(260.0)
                    .fill(tone_color(status.tone)),
            );
        }
    });

    ui.add_space(12.0);
    ui.heading("Records");
    ui.horizontal_wrapped(|ui| {
        for (kind, count) in &overview.record_counts {
            ui.label(format!("{}: {}", kind.label(), count));
            ui.separator();
        }
    });
}
