pub mod camera;
pub mod constants;
pub mod driver;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod shading;
pub mod stats;
pub mod uniforms;

pub use camera::*;
pub use constants::*;
pub use driver::*;
pub use shading::ShadeInputs;
pub use stats::*;
pub use uniforms::*;

/// Vertex and fragment program for the black hole pass.
pub static BLACKHOLE_WGSL: &str = include_str!("../shaders/blackhole.wgsl");
