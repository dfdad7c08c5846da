// DOM contract of the landing page.

// Element ids
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const LOADER_ID: &str = "loader";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const LANG_TOGGLE_ID: &str = "lang-toggle";
pub const ENABLE_3D_ID: &str = "enable-3d-btn";
pub const DISABLE_3D_ID: &str = "disable-3d-btn";
pub const HERO_SECTION_ID: &str = "hero";
pub const GALLERY_SELECTOR: &str = ".gallery-carousel";

// Classes
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TOUCH_BODY_CLASS: &str = "is-touch";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const LOAD_FAILED_CLASS: &str = "load-failed";

// Environment
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Assets
pub const MODEL_PATH: &str = "assets/model.glb";
