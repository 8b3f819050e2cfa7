#![allow(dead_code)]

mod app;
mod constants;
mod input;
mod logging;
mod messages;
mod prefs;
mod series;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::ThreadRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::app::AppState;
use crate::constants::UI_FPS;
use crate::prefs::{FsStore, Preferences};

fn main() -> Result<()> {
    logging::init();

    let store_path = FsStore::default_path().unwrap_or_else(|| "pulseboard_prefs.json".into());
    let mut store = FsStore::open(store_path);
    let prefs = Preferences::load(&store);
    info!(?prefs, "session start");

    let mut rng = rand::thread_rng();
    let mut state = AppState::seeded(prefs, &mut rng, Utc::now().timestamp_millis());

    // --- Terminal setup ---
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut state, &mut store, &mut rng);

    // --- Cleanup ---
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    store: &mut FsStore,
    rng: &mut ThreadRng,
) -> Result<()> {
    let frame_duration = Duration::from_millis(1000 / UI_FPS);

    loop {
        let frame_start = Instant::now();

        // --- Advance the series while live ---
        if state.ticker.poll(frame_start) {
            state.window.advance(rng, Utc::now().timestamp_millis());
        }

        // --- Process keyboard input (non-blocking) ---
        if event::poll(Duration::from_millis(1))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(evt) = input::handle_key(key, state.focus) {
                        state.apply(evt, store);
                    }
                }
            }
        }

        if state.should_quit {
            info!("session end");
            break;
        }

        // --- Render ---
        terminal.draw(|frame| ui::draw(frame, state))?;

        // --- Frame rate limiting ---
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    Ok(())
}
