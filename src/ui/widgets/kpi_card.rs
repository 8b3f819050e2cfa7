use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::app::Kpi;
use crate::ui::theme::Palette;

pub struct KpiCardWidget {
    pub kpi: Kpi,
    pub palette: Palette,
}

impl Widget for KpiCardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .style(Style::default().bg(self.palette.panel_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        buf.set_string(
            inner.x + 1,
            inner.y,
            self.kpi.title,
            Style::default().fg(self.palette.dim),
        );

        // Change tag, right-aligned on the title row
        let change_x = inner
            .right()
            .saturating_sub(self.kpi.change.len() as u16 + 1);
        let change_color = if self.kpi.change.starts_with('+') {
            self.palette.positive
        } else {
            self.palette.negative
        };
        buf.set_string(
            change_x,
            inner.y,
            self.kpi.change,
            Style::default().fg(change_color),
        );

        if inner.height > 1 {
            buf.set_string(
                inner.x + 1,
                inner.y + 1,
                self.kpi.value,
                Style::default()
                    .fg(self.palette.fg)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}
