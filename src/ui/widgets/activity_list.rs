use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::ui::theme::Palette;

pub struct ActivityListWidget<'a> {
    pub items: &'a [&'static str],
    pub palette: Palette,
}

impl Widget for ActivityListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Activity ")
            .title_style(Style::default().fg(self.palette.fg))
            .style(Style::default().bg(self.palette.panel_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "No results",
                Style::default().fg(self.palette.dim),
            );
            return;
        }

        let stamp = "just now";
        for (i, item) in self.items.iter().take(inner.height as usize).enumerate() {
            let y = inner.y + i as u16;
            buf.set_string(inner.x + 1, y, "•", Style::default().fg(self.palette.accent));
            let max_w = inner.width.saturating_sub(stamp.len() as u16 + 5) as usize;
            let label: String = item.chars().take(max_w).collect();
            buf.set_string(inner.x + 3, y, &label, Style::default().fg(self.palette.fg));
            let sx = inner.right().saturating_sub(stamp.len() as u16 + 1);
            buf.set_string(sx, y, stamp, Style::default().fg(self.palette.dim));
        }
    }
}
