use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Env-gated file logging. The TUI owns the terminal, so diagnostics go to
/// a file under the local data dir; with no `RUST_LOG` set, logging is off.
pub fn init() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().ok()?;
    let dir = dirs::data_local_dir()?.join("pulseboard");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("pulseboard.log");
    let file = File::create(&path).ok()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Some(path)
}
