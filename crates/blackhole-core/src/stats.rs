//! Measured frame rate for diagnostics. Never feeds the simulation clock.

use crate::constants::STATS_LOG_INTERVAL_SEC;

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    elapsed_sec: f32,
    frames: u32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame interval; returns the average fps once per log interval.
    pub fn record(&mut self, dt_sec: f32) -> Option<f32> {
        self.elapsed_sec += dt_sec.max(0.0);
        self.frames += 1;
        if self.elapsed_sec < STATS_LOG_INTERVAL_SEC {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed_sec;
        *self = Self::default();
        Some(fps)
    }
}
