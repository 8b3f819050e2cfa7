pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{AppState, KPIS};
use crate::input;

use layout::{KpiLayout, MainLayout, ScreenLayout};
use theme::Palette;
use widgets::activity_list::ActivityListWidget;
use widgets::chart_panel::ChartPanelWidget;
use widgets::header::HeaderWidget;
use widgets::keyboard_hint::KeyboardHintWidget;
use widgets::kpi_card::KpiCardWidget;
use widgets::theme_panel::ThemePanelWidget;

/// Render one frame of the dashboard from current state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let palette = Palette::new(state.prefs.theme, state.prefs.accent);
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let layout = ScreenLayout::new(area);

    frame.render_widget(
        HeaderWidget {
            palette,
            query: &state.query,
            focus: state.focus,
            live: state.prefs.live,
            theme: state.prefs.theme,
            accent: state.prefs.accent,
        },
        layout.header,
    );

    let kpi_layout = KpiLayout::new(layout.kpis);
    for (kpi, card_area) in KPIS.iter().zip(kpi_layout.cards) {
        frame.render_widget(
            KpiCardWidget { kpi: *kpi, palette },
            card_area,
        );
    }

    let main = MainLayout::new(layout.main);

    let points = state.window.display_points();
    frame.render_widget(
        ChartPanelWidget {
            points: &points,
            live: state.prefs.live,
            palette,
        },
        main.chart,
    );

    frame.render_widget(
        ThemePanelWidget {
            theme: state.prefs.theme,
            accent: state.prefs.accent,
            palette,
        },
        main.theme_panel,
    );

    let items = state.filtered_activity();
    frame.render_widget(
        ActivityListWidget {
            items: &items,
            palette,
        },
        main.activity,
    );

    frame.render_widget(
        KeyboardHintWidget {
            hints: input::key_hints(state.focus),
            palette,
        },
        layout.footer,
    );
}
