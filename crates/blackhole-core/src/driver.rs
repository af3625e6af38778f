//! Host-independent frame driver.
//!
//! Owns everything that evolves between frames (time accumulator, camera
//! drift, surface size) and turns one tick into the uniforms for one draw.
//! Front-ends push [`InputEvent`]s into an [`EventQueue`] from their callbacks;
//! the queue is drained once per tick so input never mutates the simulation
//! in the middle of a frame.

use crate::camera::CameraDrift;
use crate::constants::TIME_STEP;
use crate::uniforms::FrameUniforms;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer x in surface pixels.
    PointerMove { x: f32 },
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Truncate a CSS box to whole pixels (no device-pixel-ratio scaling).
    pub fn from_css(width: f64, height: f64) -> Self {
        Self::new(width.max(0.0) as u32, height.max(0.0) as u32)
    }

    pub fn is_sized(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
}

/// What the host should do with the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub uniforms: FrameUniforms,
    pub viewport: SurfaceSize,
}

impl FramePlan {
    /// An unsized surface advances time and camera but skips the draw.
    pub fn should_draw(&self) -> bool {
        self.viewport.is_sized()
    }
}

#[derive(Debug)]
pub struct Driver {
    phase: Phase,
    time: f32,
    camera: CameraDrift,
    surface: SurfaceSize,
    frames: u64,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            time: 0.0,
            camera: CameraDrift::new(),
            surface: SurfaceSize::default(),
            frames: 0,
        }
    }

    /// Called once the GPU program and quad are ready. Idempotent.
    pub fn start(&mut self) {
        if self.phase == Phase::Uninitialized {
            log::info!("[frame] driver running");
            self.phase = Phase::Running;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn camera(&self) -> &CameraDrift {
        &self.camera
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x } => self.camera.set_pointer(x, self.surface.width),
        }
    }

    /// Run one frame.
    ///
    /// `surface` is the canvas size measured this frame. Returns `None` until
    /// [`Driver::start`] has been called; queued events stay queued until then.
    pub fn tick(&mut self, events: &mut EventQueue, surface: SurfaceSize) -> Option<FramePlan> {
        if self.phase != Phase::Running {
            return None;
        }
        for event in events.drain() {
            self.apply(event);
        }

        self.time += TIME_STEP;
        if surface != self.surface {
            log::debug!(
                "[frame] surface {}x{} -> {}x{}",
                self.surface.width,
                self.surface.height,
                surface.width,
                surface.height
            );
            self.surface = surface;
        }
        let cam_rot = self.camera.step();
        self.frames += 1;

        Some(FramePlan {
            uniforms: FrameUniforms {
                res: [self.surface.width as f32, self.surface.height as f32],
                time: self.time,
                cam_rot,
            },
            viewport: self.surface,
        })
    }
}
