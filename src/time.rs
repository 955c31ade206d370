//! Clock abstraction and frame-rate sampling

use std::time::Instant;

use crate::consts::FPS_WINDOW_MS;

/// Monotonic time source, in milliseconds.
///
/// The runner never reads wall-clock time directly; tests and the demo
/// binary drive it with a [`ManualClock`] instead.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Std clock backed by [`Instant`]
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-advanced clock for tests and scripted runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, ms: f64) {
        self.now_ms = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Frames-per-second sampled over a fixed window
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start_ms: f64,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start_ms: now_ms,
            fps: 0,
        }
    }

    /// Count one frame; the reading refreshes once per window.
    pub fn frame(&mut self, now_ms: f64) {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed >= FPS_WINDOW_MS {
            self.fps = ((self.frames as f64) * 1000.0 / elapsed).round() as u32;
            self.frames = 0;
            self.window_start_ms = now_ms;
        }
    }

    /// Most recent completed reading
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Restart the window without dropping the published reading
    /// (used on resume so pause time is not counted).
    pub fn rearm(&mut self, now_ms: f64) {
        self.frames = 0;
        self.window_start_ms = now_ms;
    }

    /// Zero the counter and the published reading
    pub fn reset(&mut self, now_ms: f64) {
        self.rearm(now_ms);
        self.fps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 32.0);
        clock.set(1000.0);
        assert_eq!(clock.now_ms(), 1000.0);
    }

    #[test]
    fn test_monotonic_clock_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_fps_counter_window() {
        let mut counter = FpsCounter::new(0.0);
        // 10 ms per frame: reading stays 0 until the 500 ms window closes
        for i in 1..=49 {
            counter.frame(i as f64 * 10.0);
            assert_eq!(counter.fps(), 0);
        }
        counter.frame(500.0);
        assert_eq!(counter.fps(), 100);
    }

    #[test]
    fn test_fps_counter_rounds() {
        let mut counter = FpsCounter::new(0.0);
        for i in 1..=31 {
            counter.frame(i as f64 * 16.5);
        }
        // Window closes at 511.5 ms with 31 frames: 60.6 rounds to 61
        assert_eq!(counter.fps(), 61);
    }

    #[test]
    fn test_rearm_keeps_reading() {
        let mut counter = FpsCounter::new(0.0);
        for i in 1..=50 {
            counter.frame(i as f64 * 10.0);
        }
        assert_eq!(counter.fps(), 100);
        counter.rearm(10_000.0);
        assert_eq!(counter.fps(), 100);
        counter.reset(10_000.0);
        assert_eq!(counter.fps(), 0);
    }
}
