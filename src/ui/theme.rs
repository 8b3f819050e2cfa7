use ratatui::style::Color;

use crate::prefs::{Accent, Theme};

/// Resolved colors for one (theme, accent) combination. Built once per
/// frame and handed to every widget, so widgets stay palette-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub panel_bg: Color,
    pub header_bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub live: Color,
    pub positive: Color,
    pub negative: Color,
}

/// Accent ramp shared by both schemes
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Indigo => Color::Rgb(99, 102, 241),
        Accent::Emerald => Color::Rgb(16, 185, 129),
        Accent::Amber => Color::Rgb(245, 158, 11),
        Accent::Rose => Color::Rgb(244, 63, 94),
    }
}

impl Palette {
    pub fn new(theme: Theme, accent: Accent) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(9, 9, 11),
                panel_bg: Color::Rgb(24, 24, 27),
                header_bg: Color::Rgb(24, 24, 27),
                fg: Color::Rgb(244, 244, 245),
                dim: Color::Rgb(161, 161, 170),
                border: Color::Rgb(39, 39, 42),
                accent: accent_color(accent),
                live: Color::Rgb(16, 185, 129),
                positive: Color::Rgb(52, 211, 153),
                negative: Color::Rgb(251, 113, 133),
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                panel_bg: Color::Rgb(255, 255, 255),
                header_bg: Color::Rgb(244, 244, 245),
                fg: Color::Rgb(24, 24, 27),
                dim: Color::Rgb(113, 113, 122),
                border: Color::Rgb(228, 228, 231),
                accent: accent_color(accent),
                live: Color::Rgb(5, 150, 105),
                positive: Color::Rgb(5, 150, 105),
                negative: Color::Rgb(225, 29, 72),
            },
        }
    }
}
