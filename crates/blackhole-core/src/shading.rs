//! CPU reference of the black hole fragment program.
//!
//! Every function here mirrors a step of `shaders/blackhole.wgsl` using the
//! same constants and the same GLSL-style helpers (`fract`, `smoothstep`,
//! `step`), so properties of the GPU output can be checked on the host.
//! Fragment coordinates use a bottom-left origin, pixel centers at `+0.5`.

use crate::constants::*;
use crate::uniforms::FrameUniforms;
use glam::{Mat2, Vec2, Vec3, Vec4};

/// Per-frame inputs of the shading function (the three uniforms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeInputs {
    pub resolution: Vec2,
    pub time: f32,
    pub cam_rot: f32,
}

impl ShadeInputs {
    pub fn new(resolution: Vec2, time: f32, cam_rot: f32) -> Self {
        Self {
            resolution,
            time,
            cam_rot,
        }
    }

    /// Aspect-corrected, camera-rotated view coordinate of a fragment.
    pub fn view_coord(&self, frag_coord: Vec2) -> Vec2 {
        rotate(normalize_coord(frag_coord, self.resolution), self.cam_rot)
    }

    /// Evaluate the full program for one fragment.
    pub fn shade(&self, frag_coord: Vec2) -> Vec4 {
        let uv = self.view_coord(frag_coord);
        let r = uv.length();

        let horizon = horizon_mask(r);
        let bg = Vec3::splat(stars(uv * lens_factor(r)));

        let disk = disk_color(disk_intensity(disk_frame(uv, self.time)));
        let color = (bg + disk + bloom(disk)) * (1.0 - horizon);

        color.extend(1.0)
    }
}

impl From<&FrameUniforms> for ShadeInputs {
    fn from(u: &FrameUniforms) -> Self {
        Self::new(Vec2::from(u.res), u.time, u.cam_rot)
    }
}

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Counter-clockwise rotation of `v` by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Mat2::from_angle(angle) * v
}

/// Map a fragment to view space: [-1, 1] on y, x stretched by the aspect ratio.
///
/// Zero-sized resolution components are treated as 1 so the result stays finite
/// before the surface has been sized.
pub fn normalize_coord(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
    let res = resolution.max(Vec2::ONE);
    let mut uv = (frag_coord / res) * 2.0 - Vec2::ONE;
    uv.x *= res.x / res.y;
    uv
}

/// Inverse of [`normalize_coord`] (without camera rotation).
pub fn view_to_frag(view: Vec2, resolution: Vec2) -> Vec2 {
    let res = resolution.max(Vec2::ONE);
    let uv = Vec2::new(view.x * res.y / res.x, view.y);
    (uv + Vec2::ONE) * 0.5 * res
}

/// 1 inside the horizon, 0 outside, soft edge between the two radii.
#[inline]
pub fn horizon_mask(r: f32) -> f32 {
    smoothstep(HORIZON_OUTER, HORIZON_INNER, r)
}

#[inline]
pub fn lens_factor(r: f32) -> f32 {
    1.0 / (1.0 + r * LENS_STRENGTH)
}

/// Stable pseudo-random value in [0, 1) for a star cell id.
#[inline]
pub fn star_hash(id: Vec2) -> f32 {
    fract((id.dot(Vec2::from(STAR_HASH_KEY))).sin() * STAR_HASH_SCALE)
}

/// Split a lensed coordinate into (cell id, cell-local offset in [-0.5, 0.5)).
#[inline]
pub fn star_cell(uv: Vec2) -> (Vec2, Vec2) {
    let scaled = uv * STAR_GRID;
    let local = Vec2::new(fract(scaled.x), fract(scaled.y)) - Vec2::splat(0.5);
    (scaled.floor(), local)
}

pub fn stars(uv: Vec2) -> f32 {
    let (id, local) = star_cell(uv);
    smoothstep(STAR_RADIUS, 0.0, local.length()) * step(STAR_THRESHOLD, star_hash(id))
}

/// Tilt then swirl the view coordinate into the disk's frame.
pub fn disk_frame(uv: Vec2, time: f32) -> Vec2 {
    rotate(rotate(uv, DISK_TILT), time * DISK_SWIRL_RATE)
}

/// Ring falloff around `DISK_RADIUS` times thickness falloff in `y`.
pub fn disk_intensity(d: Vec2) -> f32 {
    let ring = (-(d.length() - DISK_RADIUS).abs() * DISK_RING_FALLOFF).exp();
    let thickness = (-d.y.abs() * DISK_THICKNESS_FALLOFF).exp();
    ring * thickness
}

#[inline]
pub fn disk_color(intensity: f32) -> Vec3 {
    Vec3::from(DISK_COLOR) * intensity
}

#[inline]
pub fn bloom(disk: Vec3) -> Vec3 {
    disk * disk * BLOOM_GAIN
}

/// Shade every pixel of a `width` x `height` image.
///
/// Row-major, row 0 is the bottom row (matching fragment coordinates).
pub fn render_image(width: u32, height: u32, time: f32, cam_rot: f32) -> Vec<Vec4> {
    let inputs = ShadeInputs::new(Vec2::new(width as f32, height as f32), time, cam_rot);
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            out.push(inputs.shade(Vec2::new(x as f32 + 0.5, y as f32 + 0.5)));
        }
    }
    out
}
