//! Time management utilities
//!
//! [`FrameClock`] is the scene's notion of time: it only moves when the host
//! ticks it, so the same code runs under a real display loop and in headless
//! tests. [`WallClock`] measures real frame intervals for hosts that have one.

use std::time::Instant;

use serde::Serialize;

/// Timing information for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrameTime {
    /// Seconds since the clock was created
    pub elapsed: f32,
    /// Seconds since the previous tick, never negative
    pub delta: f32,
    /// Number of ticks so far, starting at 1 for the first frame
    pub frame: u64,
}

/// Clamp a host-supplied frame delta to something safe to integrate.
///
/// Negative, zero, NaN and infinite values all become `0.0`.
pub fn sanitize_delta(raw_delta: f32) -> f32 {
    if raw_delta.is_finite() && raw_delta > 0.0 {
        raw_delta
    } else {
        0.0
    }
}

/// Virtual frame clock advanced once per rendered frame.
///
/// Elapsed time accumulates in `f64`; an `f32` sum stops moving at 60 fps
/// after about six days.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: f64,
    frame_count: u64,
    last: FrameTime,
}

impl FrameClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame
    pub fn tick(&mut self, raw_delta: f32) -> FrameTime {
        let delta = sanitize_delta(raw_delta);
        if delta != raw_delta {
            log::debug!("Clamped frame delta {raw_delta} to 0");
        }

        self.elapsed += f64::from(delta);
        self.frame_count += 1;
        #[allow(clippy::cast_possible_truncation)]
        let elapsed = self.elapsed as f32;
        self.last = FrameTime {
            elapsed,
            delta,
            frame: self.frame_count,
        };
        self.last
    }

    /// Total elapsed time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Timing of the most recent tick
    pub fn last(&self) -> FrameTime {
        self.last
    }
}

/// Wall-clock frame timer for real-time hosts
pub struct WallClock {
    last_frame: Instant,
    total_time: f32,
    frame_count: u64,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    /// Create a new timer starting now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Seconds since the previous sample (or since creation)
    pub fn sample(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.total_time += delta;
        self.frame_count += 1;
        delta
    }

    /// Total sampled time in seconds
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Average samples per second since creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
