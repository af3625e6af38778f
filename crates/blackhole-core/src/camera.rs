//! Pointer-driven camera drift.
//!
//! The pointer's horizontal position sets a target angle; the rendered angle
//! follows it through a first-order low-pass filter so rotation never jumps.

use crate::constants::{CAMERA_DAMPING, CAMERA_SENSITIVITY};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraDrift {
    /// Horizontal pointer offset in [-0.5, 0.5]; 0 is the canvas center.
    pointer_offset: f32,
    current: f32,
}

impl CameraDrift {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer x position in surface pixels.
    ///
    /// With an unsized surface (`width == 0`) the offset falls back to 0.
    pub fn set_pointer(&mut self, x: f32, width: u32) {
        self.pointer_offset = pointer_offset(x, width);
    }

    pub fn pointer_offset(&self) -> f32 {
        self.pointer_offset
    }

    pub fn target(&self) -> f32 {
        self.pointer_offset * CAMERA_SENSITIVITY
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance the damped angle one frame toward the target; returns the new angle.
    pub fn step(&mut self) -> f32 {
        self.current = damp(self.current, self.target(), CAMERA_DAMPING);
        self.current
    }
}

#[inline]
pub fn pointer_offset(x: f32, width: u32) -> f32 {
    if width == 0 {
        return 0.0;
    }
    x / width as f32 - 0.5
}

#[inline]
pub fn damp(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}
