use std::time::Duration;

use rand::Rng;

use crate::constants::SAMPLE_INTERVAL_MS;
use crate::messages::UiEvent;
use crate::prefs::{KvStore, Preferences};
use crate::series::{SeriesWindow, Ticker};

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Normal,
    Search,
}

/// One KPI card: compiled-in demo figures.
#[derive(Debug, Clone, Copy)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Revenue",
        value: "$24,190",
        change: "+8.1%",
    },
    Kpi {
        title: "Active Users",
        value: "12,403",
        change: "+2.4%",
    },
    Kpi {
        title: "Errors",
        value: "0.12%",
        change: "-0.05%",
    },
    Kpi {
        title: "Latency",
        value: "232 ms",
        change: "-12 ms",
    },
];

pub const ACTIVITY: [&str; 6] = [
    "User signed in",
    "New deployment completed",
    "Report generated",
    "Team member invited",
    "Dark theme toggled",
    "Live data streaming",
];

pub struct AppState {
    pub prefs: Preferences,
    pub window: SeriesWindow,
    pub ticker: Ticker,
    pub query: String,
    pub focus: Focus,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(prefs: Preferences, window: SeriesWindow) -> Self {
        let interval = Duration::from_millis(SAMPLE_INTERVAL_MS as u64);
        Self {
            ticker: Ticker::new(interval, prefs.live),
            prefs,
            window,
            query: String::new(),
            focus: Focus::Normal,
            should_quit: false,
        }
    }

    pub fn seeded(prefs: Preferences, rng: &mut impl Rng, now_ms: i64) -> Self {
        Self::new(prefs, SeriesWindow::seeded(rng, now_ms))
    }

    /// Case-insensitive substring filter over the static activity feed.
    pub fn filtered_activity(&self) -> Vec<&'static str> {
        let needle = self.query.to_lowercase();
        ACTIVITY
            .iter()
            .copied()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .collect()
    }

    /// Apply one UI event. Preference changes persist immediately through
    /// the injected store; the live toggle arms or disarms the ticker.
    pub fn apply(&mut self, event: UiEvent, store: &mut dyn KvStore) {
        match event {
            UiEvent::Quit => self.should_quit = true,
            UiEvent::ToggleTheme => {
                let next = self.prefs.theme.toggled();
                self.prefs.set_theme(store, next);
            }
            UiEvent::ToggleLive => {
                let live = !self.prefs.live;
                self.prefs.set_live(store, live);
                if live {
                    self.ticker.start();
                } else {
                    self.ticker.stop();
                }
            }
            UiEvent::CycleAccent => {
                let next = self.prefs.accent.next();
                self.prefs.set_accent(store, next);
            }
            UiEvent::SelectAccent(accent) => {
                self.prefs.set_accent(store, accent);
            }
            UiEvent::FocusSearch => self.focus = Focus::Search,
            UiEvent::LeaveSearch => self.focus = Focus::Normal,
            UiEvent::SearchChar(c) => self.query.push(c),
            UiEvent::SearchBackspace => {
                self.query.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{Accent, MemStore, Theme, KEY_ACCENT, KEY_LIVE, KEY_THEME};

    fn state() -> AppState {
        let mut rng = rand::thread_rng();
        AppState::seeded(Preferences::default(), &mut rng, 1_700_000_000_000)
    }

    #[test]
    fn toggle_theme_flips_and_persists() {
        let mut store = MemStore::default();
        let mut state = state();
        state.apply(UiEvent::ToggleTheme, &mut store);
        assert_eq!(state.prefs.theme, Theme::Light);
        assert_eq!(store.get(KEY_THEME).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_live_stops_the_ticker() {
        let mut store = MemStore::default();
        let mut state = state();
        assert!(state.ticker.is_live());

        state.apply(UiEvent::ToggleLive, &mut store);
        assert!(!state.prefs.live);
        assert!(!state.ticker.is_live());
        assert_eq!(store.get(KEY_LIVE).as_deref(), Some("false"));

        // While paused, no amount of elapsed time produces a sample.
        let len = state.window.samples().len();
        let later = std::time::Instant::now() + std::time::Duration::from_secs(10);
        assert!(!state.ticker.poll(later));
        assert_eq!(state.window.samples().len(), len);

        state.apply(UiEvent::ToggleLive, &mut store);
        assert!(state.ticker.is_live());
    }

    #[test]
    fn accent_selection_persists() {
        let mut store = MemStore::default();
        let mut state = state();
        state.apply(UiEvent::SelectAccent(Accent::Rose), &mut store);
        assert_eq!(state.prefs.accent, Accent::Rose);
        assert_eq!(store.get(KEY_ACCENT).as_deref(), Some("rose"));

        state.apply(UiEvent::CycleAccent, &mut store);
        assert_eq!(state.prefs.accent, Accent::Indigo);
    }

    #[test]
    fn search_query_edits_and_filtering() {
        let mut store = MemStore::default();
        let mut state = state();
        state.apply(UiEvent::FocusSearch, &mut store);
        assert_eq!(state.focus, Focus::Search);

        for c in "DEPLOY".chars() {
            state.apply(UiEvent::SearchChar(c), &mut store);
        }
        assert_eq!(state.filtered_activity(), vec!["New deployment completed"]);

        state.apply(UiEvent::SearchBackspace, &mut store);
        assert_eq!(state.query, "DEPLO");

        state.apply(UiEvent::LeaveSearch, &mut store);
        assert_eq!(state.focus, Focus::Normal);
    }

    #[test]
    fn empty_query_matches_everything() {
        let state = state();
        assert_eq!(state.filtered_activity().len(), ACTIVITY.len());
    }

    #[test]
    fn unmatched_query_yields_no_results() {
        let mut store = MemStore::default();
        let mut state = state();
        for c in "zzz".chars() {
            state.apply(UiEvent::SearchChar(c), &mut store);
        }
        assert!(state.filtered_activity().is_empty());
    }

    #[test]
    fn paused_preference_starts_the_ticker_disarmed() {
        let prefs = Preferences {
            live: false,
            ..Preferences::default()
        };
        let mut rng = rand::thread_rng();
        let state = AppState::seeded(prefs, &mut rng, 1_700_000_000_000);
        assert!(!state.ticker.is_live());
    }
}
