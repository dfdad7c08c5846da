pub mod camera;
pub mod carousel;
pub mod constants;
pub mod env_map;
pub mod i18n;
pub mod model;
pub mod normalize;
pub mod orbit;
pub mod theme;
pub mod touch;
pub mod viewer;

pub use constants::*;

// Shaders bundled as string constants
pub static VIEWER_WGSL: &str = include_str!("../../shaders/viewer.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../../shaders/shadow.wgsl");
