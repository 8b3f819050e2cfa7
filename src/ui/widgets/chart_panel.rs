use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

use crate::series::ChartPoint;
use crate::ui::theme::Palette;

/// Line chart over the already-shaped series points. The series module is
/// responsible for time formatting and rounding; this widget only draws.
pub struct ChartPanelWidget<'a> {
    pub points: &'a [ChartPoint],
    pub live: bool,
    pub palette: Palette,
}

impl Widget for ChartPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 5 {
            return;
        }

        let status = if self.live { "streaming" } else { "paused" };
        let title = format!(" Traffic (live) · {status} ");
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(title)
            .title_style(Style::default().fg(self.palette.fg))
            .style(Style::default().bg(self.palette.panel_bg));

        if self.points.is_empty() {
            block.render(area, buf);
            return;
        }

        let data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();

        let y_max = self.points.iter().map(|p| p.value).fold(0.0, f64::max) + 10.0;
        let x_max = (data.len().saturating_sub(1) as f64).max(1.0);
        let latest = self.points.last().map(|p| p.value).unwrap_or(0.0);

        let first_time = self.points.first().map(|p| p.time.as_str()).unwrap_or("");
        let last_time = self.points.last().map(|p| p.time.as_str()).unwrap_or("");

        let datasets = vec![Dataset::default()
            .name(format!("traffic {latest:.2}"))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.palette.accent))
            .data(&data)];

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(self.palette.dim))
                    .bounds([0.0, x_max])
                    .labels(vec![
                        Line::from(first_time.to_string()),
                        Line::from(last_time.to_string()),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(self.palette.dim))
                    .bounds([0.0, y_max])
                    .labels(vec![
                        Line::from("0"),
                        Line::from(format!("{y_max:.0}")),
                    ]),
            )
            .render(area, buf);
    }
}
