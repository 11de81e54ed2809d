//! Frame-rate sampling for the parameter-window overlay.

use std::time::{Duration, Instant};

/// Minimum sampling span before the average is recomputed.
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Averages frames-per-second over one-second sampling intervals.
///
/// Call [`FrameRateTracker::tick`] once per update; [`average_fps`] holds the
/// rate measured over the last completed interval.
///
/// [`average_fps`]: FrameRateTracker::average_fps
#[derive(Debug, Clone, Copy)]
pub struct FrameRateTracker {
    interval_start: Option<Instant>,
    frames: u32,
    average_fps: f32,
}

impl Default for FrameRateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRateTracker {
    pub fn new() -> Self {
        Self {
            interval_start: None,
            frames: 0,
            average_fps: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let Some(start) = self.interval_start else {
            self.interval_start = Some(now);
            return;
        };
        self.frames += 1;
        let elapsed = now.duration_since(start);
        if elapsed >= SAMPLE_INTERVAL {
            self.average_fps = self.frames as f32 / elapsed.as_secs_f32();
            self.interval_start = Some(now);
            self.frames = 0;
        }
    }

    pub fn average_fps(&self) -> f32 {
        self.average_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_one_second_intervals() {
        let mut tracker = FrameRateTracker::new();
        let start = Instant::now();
        tracker.tick_at(start);
        // 60 frames spread over exactly one second
        for i in 1..=60u32 {
            tracker.tick_at(start + Duration::from_millis((i * 1000 / 60) as u64));
        }
        // the last tick lands short of the full second; push one past it
        tracker.tick_at(start + Duration::from_millis(1001));
        let fps = tracker.average_fps();
        assert!((55.0..=65.0).contains(&fps), "fps was {fps}");
    }

    #[test]
    fn zero_before_first_interval_completes() {
        let mut tracker = FrameRateTracker::new();
        tracker.tick_at(Instant::now());
        assert_eq!(tracker.average_fps(), 0.0);
    }
}
