// Tuning constants shared by the shading reference, the WGSL program and both front-ends.
// The WGSL source repeats these literals; `tests/constants_tests.rs` keeps them in sync.

// Host timing
pub const TIME_STEP: f32 = 0.016; // fixed per-frame advance (~60 Hz), never wall-clock

// Camera drift
pub const CAMERA_SENSITIVITY: f32 = 1.2; // radians per unit of pointer offset
pub const CAMERA_DAMPING: f32 = 0.05; // fraction of the remaining error closed per frame

// Event horizon mask: fully opaque inside INNER, fully clear outside OUTER
pub const HORIZON_OUTER: f32 = 0.18;
pub const HORIZON_INNER: f32 = 0.16;

// Background lensing
pub const LENS_STRENGTH: f32 = 1.4;

// Starfield
pub const STAR_GRID: f32 = 90.0; // cells per view-space unit
pub const STAR_THRESHOLD: f32 = 0.996; // hash cut-off, ~0.4% of cells light up
pub const STAR_RADIUS: f32 = 0.03; // dot radius in cell-local units
pub const STAR_HASH_KEY: [f32; 2] = [127.1, 311.7];
pub const STAR_HASH_SCALE: f32 = 43758.545;

// Accretion disk
pub const DISK_TILT: f32 = 0.6; // radians
pub const DISK_SWIRL_RATE: f32 = 0.4; // radians per unit of time
pub const DISK_RADIUS: f32 = 0.38;
pub const DISK_RING_FALLOFF: f32 = 22.0;
pub const DISK_THICKNESS_FALLOFF: f32 = 8.0;
pub const DISK_COLOR: [f32; 3] = [1.2, 0.55, 0.25]; // warm, overdriven red

// Cheap bloom: squared disk color scaled by this gain
pub const BLOOM_GAIN: f32 = 1.3;

// Host surface
pub const CANVAS_ID: &str = "canvas";
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Full-screen quad as a 4-vertex triangle strip in clip space
pub const QUAD_STRIP: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

// Diagnostics
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;
