use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::app::Focus;
use crate::prefs::{Accent, Theme};
use crate::ui::theme::Palette;

pub struct HeaderWidget<'a> {
    pub palette: Palette,
    pub query: &'a str,
    pub focus: Focus,
    pub live: bool,
    pub theme: Theme,
    pub accent: Accent,
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 40 || area.height < 2 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.palette.header_bg));
        let y = area.y + area.height / 2;

        // Title
        let x = area.x + 1;
        buf.set_string(
            x,
            y,
            "◆ Pulseboard",
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            x + 13,
            y,
            "Realtime Dashboard",
            Style::default().fg(self.palette.dim),
        );

        // Right-aligned status cluster: live indicator, theme, accent
        let live_label = if self.live { "● LIVE" } else { "◌ PAUSED" };
        let theme_label = self.theme.label();
        let accent_label = self.accent.label();
        let right_len =
            (live_label.chars().count() + theme_label.len() + accent_label.len() + 6) as u16;
        let right_start = area.right().saturating_sub(right_len + 1);

        let live_style = if self.live {
            Style::default().fg(self.palette.live)
        } else {
            Style::default().fg(self.palette.dim)
        };
        let mut rx = right_start;
        buf.set_string(rx, y, live_label, live_style);
        rx += live_label.chars().count() as u16 + 2;
        buf.set_string(rx, y, theme_label, Style::default().fg(self.palette.fg));
        rx += theme_label.len() as u16 + 2;
        buf.set_string(rx, y, "●", Style::default().fg(self.palette.accent));
        buf.set_string(rx + 2, y, accent_label, Style::default().fg(self.palette.dim));

        // Search box between title and status cluster
        let search_x = x + 34;
        let search_w = right_start.saturating_sub(search_x + 2);
        if search_w < 12 {
            return;
        }
        let focused = self.focus == Focus::Search;
        let box_style = if focused {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.dim)
        };
        let text = if self.query.is_empty() && !focused {
            "/ search activity".to_string()
        } else {
            let cursor = if focused { "▏" } else { "" };
            format!("/ {}{}", self.query, cursor)
        };
        let body: String = text.chars().take(search_w as usize - 2).collect();
        buf.set_string(search_x, y, format!("[{body}]"), box_style);
    }
}
