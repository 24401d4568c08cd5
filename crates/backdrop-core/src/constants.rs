// Shared scene tuning constants used by both web and native frontends.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_RADIUS_MIN: f32 = 50.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 100.0; // shell spans [min, min + span)
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;

// Particle vertex float (must match particles.wgsl)
pub const FLOAT_Y_TIME_RATE: f32 = 0.5;
pub const FLOAT_Y_PHASE_SCALE: f32 = 0.1;
pub const FLOAT_Y_AMPLITUDE: f32 = 2.0;
pub const FLOAT_X_TIME_RATE: f32 = 0.3;
pub const FLOAT_X_PHASE_SCALE: f32 = 0.1;
pub const FLOAT_X_AMPLITUDE: f32 = 1.5;
pub const POINT_SIZE_SCALE: f32 = 300.0;

// Particle fragment glow (must match particles.wgsl)
pub const GLOW_RADIUS: f32 = 0.5;
pub const GLOW_ALPHA: f32 = 0.8;

// Whole-field rotation
pub const FIELD_SPIN_Y: f32 = 0.05; // rad per second
pub const FIELD_WOBBLE_RATE: f32 = 0.1;
pub const FIELD_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const SCROLL_DRIFT_Y: f32 = 0.001;

// Floating shapes
pub const SHAPE_OPACITY: f32 = 0.3;
pub const SHAPE_SPIN_RANGE: f32 = 0.01; // per-axis speed is (U - 0.5) * range
pub const SHAPE_FLOAT_SPEED_MIN: f32 = 0.5;
pub const SHAPE_FLOAT_SPEED_SPAN: f32 = 0.5;
pub const SHAPE_FLOAT_AMPLITUDE: f32 = 2.0;

// Heart
pub const HEART_OPACITY: f32 = 0.4;
pub const HEART_POSITION: [f32; 3] = [0.0, 0.0, -15.0];
pub const HEART_SCALE: f32 = 2.0;
pub const HEART_SPIN_Y: f32 = 0.005;
pub const HEART_FLOAT_SPEED: f32 = 0.8;
pub const HEART_CURVE_SEGMENTS: usize = 12;

// Light rings
pub const RING_OPACITY: f32 = 0.2;
pub const RING_TUBE: f32 = 0.05;
pub const RING_RADIAL_SEGMENTS: u32 = 8;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const RING_SPIN_Z: f32 = 0.002;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_BASE_Z: f32 = 30.0;
pub const CAMERA_SCROLL_DEPTH: f32 = 20.0; // z at full scroll = base + depth
pub const CAMERA_SMOOTHING: f32 = 0.02; // per frame, not dt-scaled
pub const POINTER_TARGET_X: f32 = 5.0;
pub const POINTER_TARGET_Y: f32 = 3.0;

// Display
pub const PIXEL_RATIO_CAP: f32 = 2.0;

// Page chrome
pub const REVEAL_THRESHOLD: f32 = 0.2;
