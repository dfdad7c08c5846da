// Scene, material and interaction tuning for the product viewer.
// Colors are sRGB hex values; the renderer converts them to linear space.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 15.0;

// Orbit controls (rotation only)
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Renderer
pub const TONE_MAPPING_EXPOSURE: f32 = 1.8;
pub const MAX_PIXEL_RATIO: f64 = 1.5;
pub const TOUCH_PIXEL_RATIO: f64 = 1.0;
pub const MSAA_SAMPLES: u32 = 4;
pub const SHADOW_MAP_SIZE: u32 = 1024;
pub const TOUCH_SHADOW_MAP_SIZE: u32 = 512;

// Image-based lighting
pub const ENV_FACE_SIZE: u32 = 64;
pub const ENV_RANGE: f32 = 4.0; // radiance stored as value / ENV_RANGE in rgba8

// Lights
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_COLOR: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 3.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 5.0];
pub const KEY_SHADOW_EXTENT: f32 = 5.0; // half-size of the orthographic shadow frustum
pub const KEY_SHADOW_NEAR: f32 = 0.5;
pub const KEY_SHADOW_FAR: f32 = 500.0;
pub const BACK_LIGHT_COLOR: u32 = 0xffffff;
pub const BACK_LIGHT_INTENSITY: f32 = 5.0;
pub const BACK_LIGHT_POSITION: [f32; 3] = [0.0, 5.0, -10.0];
pub const BACK_LIGHT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

// Fog (exponential squared)
pub const FOG_DENSITY: f32 = 0.02;
pub const FOG_COLOR_LIGHT: u32 = 0xffffff;
pub const FOG_COLOR_DARK: u32 = 0x050505;
pub const FOG_LERP_PER_FRAME: f32 = 0.1;

// Model presentation
pub const MODEL_TARGET_SIZE: f32 = 4.2;
pub const MODEL_TILT_X: f32 = std::f32::consts::PI / 12.0;
pub const MODEL_YAW_Y: f32 = -std::f32::consts::PI / 6.0;
pub const MODEL_SPIN_PER_FRAME: f32 = 0.002;

// Material preset forced onto every mesh
pub const MATERIAL_COLOR: u32 = 0xffffff;
pub const MATERIAL_METALNESS: f32 = 1.0;
pub const MATERIAL_ROUGHNESS: f32 = 0.15;
pub const MATERIAL_ENV_INTENSITY: f32 = 2.5;

// Loading overlay
pub const OVERLAY_FADE_DELAY_MS: u32 = 500;
pub const OVERLAY_HIDE_DELAY_MS: u32 = 500;
pub const MODEL_LOAD_TIMEOUT_MS: u32 = 30_000;
pub const MODEL_PREALLOC_LIMIT: usize = 64 * 1024 * 1024;

// Viewport visibility
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Carousel
pub const DRAG_SENSITIVITY: f64 = 2.0;
