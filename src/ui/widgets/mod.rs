pub mod activity_list;
pub mod chart_panel;
pub mod header;
pub mod keyboard_hint;
pub mod kpi_card;
pub mod theme_panel;
