use eframe::egui::{Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading using the configured heading color
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .color(UI_CONFIG.colors.heading)
        .strong()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent.gamma_multiply(0.6);

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(6.0);
    ui.heading(colored_heading(text));
    ui.add_space(6.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

/// Bordered card with a heading, the building block of every tab.
pub fn card<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(UI_CONFIG.colors.side_panel)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.label.gamma_multiply(0.4)))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            section_heading(ui, title);
            add_contents(ui)
        })
        .inner
}

/// Formats a fare in rubles, e.g. `55₽`.
pub fn format_price(rubles: u32) -> String {
    format!("{}₽", rubles)
}

/// Formats minutes for the route panel, e.g. `23 мин`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{} {}", minutes, crate::ui::config::UI_TEXT.minutes_suffix)
}
