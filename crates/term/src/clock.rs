//! Frame pacing and frame-rate measurement.

use std::time::{Duration, Instant};

const FPS_SAMPLES: usize = 10;

/// Measures frame delta time and optionally caps the frame rate.
///
/// The reported frame rate is averaged over the last ten frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_fps: u32,
    last: Option<Instant>,
    samples: [Duration; FPS_SAMPLES],
    filled: usize,
    next: usize,
}

impl FrameClock {
    /// `max_fps == 0` leaves the loop uncapped.
    pub fn new(max_fps: u32) -> Self {
        Self {
            max_fps,
            last: None,
            samples: [Duration::ZERO; FPS_SAMPLES],
            filled: 0,
            next: 0,
        }
    }

    /// Minimum duration of a frame, `None` when uncapped.
    pub fn frame_budget(&self) -> Option<Duration> {
        (self.max_fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(self.max_fps)))
    }

    /// How long to wait before the next frame may start.
    pub fn remaining(&self, now: Instant) -> Duration {
        match (self.frame_budget(), self.last) {
            (Some(budget), Some(last)) => budget.saturating_sub(now.saturating_duration_since(last)),
            _ => Duration::ZERO,
        }
    }

    /// Block until the frame budget is used up, then start a new frame.
    ///
    /// Returns the seconds elapsed since the previous frame.
    pub fn tick(&mut self) -> f64 {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.tick_at(Instant::now())
    }

    /// Start a new frame at `now` without sleeping.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };
        let dt = now.saturating_duration_since(last);
        self.samples[self.next] = dt;
        self.next = (self.next + 1) % FPS_SAMPLES;
        self.filled = (self.filled + 1).min(FPS_SAMPLES);
        dt.as_secs_f64()
    }

    /// Average frames per second over the recent samples.
    pub fn fps(&self) -> f64 {
        let total: Duration = self.samples[..self.filled].iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.filled as f64 / total.as_secs_f64()
    }
}
