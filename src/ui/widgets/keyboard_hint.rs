use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::Palette;

pub struct KeyboardHintWidget {
    pub hints: Vec<(&'static str, &'static str)>,
    pub palette: Palette,
}

impl Widget for KeyboardHintWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut x = area.x + 1;
        let y = area.y;

        for (key, desc) in &self.hints {
            if x + (key.len() + desc.len() + 3) as u16 > area.x + area.width {
                break;
            }
            buf.set_string(x, y, key, Style::default().fg(self.palette.accent));
            x += key.len() as u16;
            buf.set_string(x, y, ":", Style::default().fg(self.palette.dim));
            x += 1;
            buf.set_string(x, y, desc, Style::default().fg(self.palette.fg));
            x += desc.len() as u16 + 2;
        }
    }
}
