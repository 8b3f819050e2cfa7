use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::prefs::{Accent, Theme};
use crate::ui::theme::{accent_color, Palette};

pub struct ThemePanelWidget {
    pub theme: Theme,
    pub accent: Accent,
    pub palette: Palette,
}

impl Widget for ThemePanelWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < 5 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Theme ")
            .title_style(Style::default().fg(self.palette.fg))
            .style(Style::default().bg(self.palette.panel_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        buf.set_string(
            inner.x + 1,
            inner.y,
            format!("Mode: {}", self.theme.label()),
            Style::default().fg(self.palette.fg),
        );
        buf.set_string(
            inner.x + 13,
            inner.y,
            "(press T)",
            Style::default().fg(self.palette.dim),
        );

        buf.set_string(
            inner.x + 1,
            inner.y + 2,
            "Accent:",
            Style::default().fg(self.palette.dim),
        );

        // Swatch row: the active accent is bracketed
        let mut x = inner.x + 9;
        let y = inner.y + 2;
        for accent in Accent::ALL {
            let selected = accent == self.accent;
            let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
            buf.set_string(x, y, open, Style::default().fg(self.palette.fg));
            buf.set_string(x + 1, y, "██", Style::default().fg(accent_color(accent)));
            buf.set_string(x + 3, y, close, Style::default().fg(self.palette.fg));
            x += 4;
        }

        if inner.height > 3 {
            buf.set_string(
                inner.x + 1,
                inner.y + 3,
                format!("{:>24}", self.accent.label()),
                Style::default().fg(self.palette.dim),
            );
        }
    }
}
