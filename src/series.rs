use std::time::{Duration, Instant};

use chrono::{Local, TimeZone};
use rand::Rng;

use crate::constants::{
    SAMPLE_INTERVAL_MS, SEED_AMPLITUDE, SEED_BASELINE, WALK_BASELINE, WALK_JITTER, WINDOW_CAPACITY,
};

/// One timestamped measurement in the synthetic traffic series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

/// Chart-ready point: display-formatted local time plus a value rounded
/// to two decimals. This is the only shape the chart panel consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub time: String,
    pub value: f64,
}

/// Seed a full window: samples spaced `SAMPLE_INTERVAL_MS` apart ending at
/// `now_ms`, following a sine curve with uniform jitter on top.
pub fn seed(rng: &mut impl Rng, now_ms: i64) -> Vec<Sample> {
    (0..WINDOW_CAPACITY)
        .map(|i| Sample {
            timestamp_ms: now_ms - (WINDOW_CAPACITY as i64 - 1 - i as i64) * SAMPLE_INTERVAL_MS,
            value: SEED_BASELINE
                + SEED_AMPLITUDE * (i as f64 / 4.0).sin()
                + rng.gen_range(0.0..4.0),
        })
        .collect()
}

/// Produce the next sample: one interval past `last`, value following a
/// random walk clamped at zero. With no history the walk starts at the
/// baseline and the timestamp falls back to `now_ms`.
pub fn advance(rng: &mut impl Rng, last: Option<&Sample>, now_ms: i64) -> Sample {
    let timestamp_ms = last
        .map(|s| s.timestamp_ms + SAMPLE_INTERVAL_MS)
        .unwrap_or(now_ms);
    let base = last.map(|s| s.value).unwrap_or(WALK_BASELINE);
    Sample {
        timestamp_ms,
        value: (base + rng.gen_range(-WALK_JITTER..WALK_JITTER)).max(0.0),
    }
}

/// Fixed-capacity FIFO window over the series. The oldest sample is
/// evicted exactly when a push would exceed capacity.
#[derive(Debug, Clone)]
pub struct SeriesWindow {
    samples: Vec<Sample>,
}

impl SeriesWindow {
    pub fn seeded(rng: &mut impl Rng, now_ms: i64) -> Self {
        Self {
            samples: seed(rng, now_ms),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == WINDOW_CAPACITY {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    /// Append the next random-walk sample.
    pub fn advance(&mut self, rng: &mut impl Rng, now_ms: i64) {
        let next = advance(rng, self.samples.last(), now_ms);
        self.push(next);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Shape the window for the chart collaborator.
    pub fn display_points(&self) -> Vec<ChartPoint> {
        self.samples
            .iter()
            .map(|s| ChartPoint {
                time: format_timestamp(s.timestamp_ms),
                value: (s.value * 100.0).round() / 100.0,
            })
            .collect()
    }
}

fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Drives live advancement. Armed while live, disarmed while paused;
/// resuming re-arms a full interval from now, so pause/resume never
/// accumulates drift.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration, live: bool) -> Self {
        let mut ticker = Self {
            interval,
            next_due: None,
        };
        if live {
            ticker.start();
        }
        ticker
    }

    pub fn start(&mut self) {
        self.next_due = Some(Instant::now() + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_live(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when an interval has elapsed, re-arming for the next.
    /// Always false while stopped.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_700_000_000_000;

    #[test]
    fn seed_fills_the_window_ending_now() {
        let mut rng = rand::thread_rng();
        let samples = seed(&mut rng, NOW_MS);
        assert_eq!(samples.len(), WINDOW_CAPACITY);
        assert_eq!(samples.last().unwrap().timestamp_ms, NOW_MS);
        for pair in samples.windows(2) {
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, SAMPLE_INTERVAL_MS);
        }
        for s in &samples {
            assert!(s.value >= 0.0);
        }
    }

    #[test]
    fn seed_jitter_stays_on_the_curve() {
        let mut rng = rand::thread_rng();
        for (i, s) in seed(&mut rng, NOW_MS).iter().enumerate() {
            let base = SEED_BASELINE + SEED_AMPLITUDE * (i as f64 / 4.0).sin();
            assert!(s.value >= base && s.value < base + 4.0);
        }
    }

    #[test]
    fn advance_steps_one_interval_from_last() {
        let mut rng = rand::thread_rng();
        let last = Sample {
            timestamp_ms: NOW_MS,
            value: 50.0,
        };
        let next = advance(&mut rng, Some(&last), NOW_MS + 999);
        assert_eq!(next.timestamp_ms, NOW_MS + SAMPLE_INTERVAL_MS);
        assert!(next.value >= 0.0);
        assert!((next.value - last.value).abs() <= WALK_JITTER);
    }

    #[test]
    fn advance_clamps_at_zero() {
        let mut rng = rand::thread_rng();
        let last = Sample {
            timestamp_ms: NOW_MS,
            value: 0.0,
        };
        for _ in 0..100 {
            assert!(advance(&mut rng, Some(&last), NOW_MS).value >= 0.0);
        }
    }

    #[test]
    fn advance_without_history_starts_at_baseline() {
        let mut rng = rand::thread_rng();
        let next = advance(&mut rng, None, NOW_MS);
        assert_eq!(next.timestamp_ms, NOW_MS);
        assert!(next.value >= WALK_BASELINE - WALK_JITTER);
        assert!(next.value <= WALK_BASELINE + WALK_JITTER);
    }

    #[test]
    fn push_beyond_capacity_evicts_the_oldest() {
        let mut rng = rand::thread_rng();
        let mut window = SeriesWindow::seeded(&mut rng, NOW_MS);
        let before = window.samples().to_vec();
        let extra = Sample {
            timestamp_ms: NOW_MS + SAMPLE_INTERVAL_MS,
            value: 42.0,
        };
        window.push(extra);
        assert_eq!(window.samples().len(), WINDOW_CAPACITY);
        assert_eq!(&window.samples()[..WINDOW_CAPACITY - 1], &before[1..]);
        assert_eq!(*window.last().unwrap(), extra);
    }

    #[test]
    fn display_points_round_to_two_decimals() {
        let mut window = SeriesWindow { samples: vec![] };
        window.push(Sample {
            timestamp_ms: NOW_MS,
            value: 41.23789,
        });
        let points = window.display_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 41.24);
    }

    #[test]
    fn paused_ticker_never_fires() {
        let mut ticker = Ticker::new(Duration::from_millis(10), false);
        assert!(!ticker.is_live());
        assert!(!ticker.poll(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn live_ticker_fires_once_due_and_rearms() {
        let mut ticker = Ticker::new(Duration::from_secs(2), true);
        let now = Instant::now();
        assert!(!ticker.poll(now));
        assert!(ticker.poll(now + Duration::from_secs(3)));
        // re-armed: not due again immediately
        assert!(!ticker.poll(now + Duration::from_secs(3)));
    }

    #[test]
    fn stop_disarms_and_start_rearms_fresh() {
        let mut ticker = Ticker::new(Duration::from_secs(2), true);
        ticker.stop();
        assert!(!ticker.poll(Instant::now() + Duration::from_secs(60)));
        ticker.start();
        assert!(ticker.is_live());
        assert!(!ticker.poll(Instant::now()));
    }
}
