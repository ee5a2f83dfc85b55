use std::collections::BTreeMap;

use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use fd_core::Severity;
use fd_views::Tone;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Counter Dark".to_string(),
            dark_mode: true,
        }
    }
}

/// Apply the dashboard theme: charcoal panels with an amber accent
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let bg_color = Color32::from_rgb(24, 24, 24);
    let panel_bg = Color32::from_rgb(31, 31, 31);
    let widget_bg = Color32::from_rgb(45, 45, 45);
    let hover_color = Color32::from_rgb(63, 63, 63);
    let accent = accent_color();
    let text_color = Color32::from_rgb(235, 235, 235);

    if theme.dark_mode {
        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, hover_color);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);

        visuals.widgets.active.bg_fill = accent.linear_multiply(0.6);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::BLACK);
    }
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(6.0);
    }

    visuals.selection.bg_fill = accent.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;
    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(245, 158, 11)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(239, 68, 68)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(251, 191, 36)
}

pub fn success_color() -> Color32 {
    Color32::from_rgb(16, 185, 129)
}

pub fn info_color() -> Color32 {
    Color32::from_rgb(96, 165, 250)
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Good => success_color(),
        Tone::Warn => warning_color(),
        Tone::Bad => error_color(),
    }
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => info_color(),
        Severity::Success => success_color(),
        Severity::Warning => warning_color(),
        Severity::Error => error_color(),
    }
}
