//! Uniform block shared with the fragment program.
//!
//! The WGSL struct is `{ uRes: vec2<f32>, uTime: f32, uCamRot: f32 }`, 16 bytes
//! with no padding. Host code addresses fields by name through
//! [`UniformSlot::resolve`]; unknown names resolve to an inert slot.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub res: [f32; 2],
    pub time: f32,
    pub cam_rot: f32,
}

impl FrameUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Bytes of a single named field, or `None` for an inert slot.
    pub fn field_bytes(&self, slot: UniformSlot) -> Option<&[u8]> {
        let range = slot.byte_range()?;
        Some(&bytemuck::bytes_of(self)[range])
    }
}

pub const UNIFORM_RES: &str = "uRes";
pub const UNIFORM_TIME: &str = "uTime";
pub const UNIFORM_CAM_ROT: &str = "uCamRot";

/// A resolved uniform location: byte offset and size inside [`FrameUniforms`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformSlot {
    offset: Option<u64>,
    size: u64,
}

impl UniformSlot {
    pub const INERT: Self = Self {
        offset: None,
        size: 0,
    };

    pub fn resolve(name: &str) -> Self {
        match name {
            UNIFORM_RES => Self::at(0, 8),
            UNIFORM_TIME => Self::at(8, 4),
            UNIFORM_CAM_ROT => Self::at(12, 4),
            _ => {
                log::warn!("[gpu] unknown uniform {:?}, writes will be ignored", name);
                Self::INERT
            }
        }
    }

    const fn at(offset: u64, size: u64) -> Self {
        Self {
            offset: Some(offset),
            size,
        }
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn is_inert(&self) -> bool {
        self.offset.is_none()
    }

    fn byte_range(&self) -> Option<std::ops::Range<usize>> {
        let start = self.offset? as usize;
        Some(start..start + self.size as usize)
    }
}

/// The three slots the driver writes every frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformSlots {
    pub res: UniformSlot,
    pub time: UniformSlot,
    pub cam_rot: UniformSlot,
}

impl UniformSlots {
    pub fn resolve() -> Self {
        Self {
            res: UniformSlot::resolve(UNIFORM_RES),
            time: UniformSlot::resolve(UNIFORM_TIME),
            cam_rot: UniformSlot::resolve(UNIFORM_CAM_ROT),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = UniformSlot> {
        [self.res, self.time, self.cam_rot].into_iter()
    }
}
