/// Sliding-window capacity for the traffic series
pub const WINDOW_CAPACITY: usize = 30;
/// Interval between consecutive samples in milliseconds
pub const SAMPLE_INTERVAL_MS: i64 = 2_000;
/// Baseline the seed curve oscillates around
pub const SEED_BASELINE: f64 = 40.0;
/// Amplitude of the seed curve's sine component
pub const SEED_AMPLITUDE: f64 = 8.0;
/// Starting value for the random walk when the window is empty
pub const WALK_BASELINE: f64 = 50.0;
/// Half-width of the per-step random walk jitter
pub const WALK_JITTER: f64 = 3.0;
/// UI refresh rate target
pub const UI_FPS: u64 = 30;
