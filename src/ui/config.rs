use eframe::egui::Color32;

use crate::domain::Line;
pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub header_panel: Color32,
    pub status_on_time: Color32,
    pub status_delayed: Color32,
    pub status_arriving: Color32,
    pub ticket_active: Color32,
    pub route_origin: Color32,
    pub route_destination: Color32,
    pub map_background: Color32,
    pub marker_outline: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Concrete colors behind each line's theme token
    pub line_palette: &'static [(&'static str, Color32)],
    /// How long a purchase toast stays on screen
    pub toast_seconds: f32,
    /// Share of the tab width given to the map canvas
    pub map_width_share: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // This sets every label globally to this color
        heading: Color32::from_rgb(255, 196, 0),
        subsection_heading: Color32::ORANGE,
        accent: Color32::from_rgb(255, 170, 0),
        central_panel: Color32::from_rgb(24, 28, 38),
        side_panel: Color32::from_rgb(18, 20, 28),
        header_panel: Color32::from_rgb(20, 34, 66),
        status_on_time: Color32::from_rgb(34, 197, 94),
        status_delayed: Color32::from_rgb(249, 115, 22),
        status_arriving: Color32::from_rgb(59, 130, 246),
        ticket_active: Color32::from_rgb(34, 197, 94),
        route_origin: Color32::from_rgb(34, 197, 94),
        route_destination: Color32::from_rgb(239, 68, 68),
        map_background: Color32::from_rgb(32, 36, 48),
        marker_outline: Color32::WHITE,
    },
    line_palette: &[
        ("metro-red", Color32::from_rgb(220, 38, 38)),
        ("metro-blue", Color32::from_rgb(37, 99, 235)),
        ("metro-green", Color32::from_rgb(22, 163, 74)),
        ("metro-yellow", Color32::from_rgb(234, 179, 8)),
        ("metro-purple", Color32::from_rgb(147, 51, 234)),
    ],
    toast_seconds: 4.0,
    map_width_share: 0.64,
};

/// Resolves a line's color token. Unknown tokens fall back to the label color.
pub fn line_color(line: Line) -> Color32 {
    token_color(line.color_token()).unwrap_or(UI_CONFIG.colors.label)
}

pub fn token_color(token: &str) -> Option<Color32> {
    UI_CONFIG
        .line_palette
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, color)| *color)
}

/// Text color that stays readable on top of a line badge.
pub fn line_text_color(line: Line) -> Color32 {
    match line {
        Line::Yellow => Color32::from_rgb(20, 34, 66),
        _ => Color32::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_line_token_has_its_own_color() {
        let colors: HashSet<_> = Line::iter()
            .map(|line| token_color(line.color_token()).unwrap())
            .collect();
        assert_eq!(colors.len(), Line::iter().count());
        assert_eq!(line_color(Line::Red), Color32::from_rgb(220, 38, 38));
        assert_eq!(token_color("metro-orange"), None);
    }
}
