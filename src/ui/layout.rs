use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout regions
pub struct ScreenLayout {
    pub header: Rect,
    pub kpis: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header (title, search, toggles)
                Constraint::Length(5), // KPI card row
                Constraint::Min(10),   // Chart + side panel
                Constraint::Length(2), // Footer (key hints)
            ])
            .split(area);

        Self {
            header: chunks[0],
            kpis: chunks[1],
            main: chunks[2],
            footer: chunks[3],
        }
    }
}

/// KPI row: four cards side by side
pub struct KpiLayout {
    pub cards: [Rect; 4],
}

impl KpiLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        Self {
            cards: [chunks[0], chunks[1], chunks[2], chunks[3]],
        }
    }
}

/// Main area: chart on the left, theme + activity panel on the right
pub struct MainLayout {
    pub chart: Rect,
    pub theme_panel: Rect,
    pub activity: Rect,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(area);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(columns[1]);

        Self {
            chart: columns[0],
            theme_panel: side[0],
            activity: side[1],
        }
    }
}
