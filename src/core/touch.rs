use super::constants::{
    ENV_FACE_SIZE, MAX_PIXEL_RATIO, MSAA_SAMPLES, SHADOW_MAP_SIZE, TOUCH_PIXEL_RATIO, TOUCH_SHADOW_MAP_SIZE,
};

/// A device counts as touch-primary when it exposes touch events or reports
/// any touch points at all.
#[inline]
pub fn is_touch_primary(has_touch_events: bool, max_touch_points: i32) -> bool {
    has_touch_events || max_touch_points > 0
}

/// How pointer input reaches the 3D viewer container.
///
/// Desktop devices interact directly. Touch devices start `Locked` so page
/// scrolling keeps working, and only capture gestures once the user opts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerInteraction {
    Direct,
    Locked,
    Active,
}

impl ViewerInteraction {
    pub fn initial(touch: bool) -> Self {
        if touch {
            ViewerInteraction::Locked
        } else {
            ViewerInteraction::Direct
        }
    }

    pub fn enable(self) -> Self {
        match self {
            ViewerInteraction::Locked => ViewerInteraction::Active,
            other => other,
        }
    }

    pub fn disable(self) -> Self {
        match self {
            ViewerInteraction::Active => ViewerInteraction::Locked,
            other => other,
        }
    }

    /// Class carried by the viewer container in this state, if any.
    pub fn container_class(self) -> Option<&'static str> {
        match self {
            ViewerInteraction::Direct => None,
            ViewerInteraction::Locked => Some("touch-locked"),
            ViewerInteraction::Active => Some("touch-active"),
        }
    }

    pub fn captures_pointer(self) -> bool {
        !matches!(self, ViewerInteraction::Locked)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Medium,
    High,
}

/// Renderer quality tier picked once from touch detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTier {
    pub sample_count: u32,
    pub precision: Precision,
    pub shadow_map_size: u32,
    touch: bool,
}

impl RenderTier {
    pub fn for_device(touch: bool) -> Self {
        if touch {
            Self {
                sample_count: 1,
                precision: Precision::Medium,
                shadow_map_size: TOUCH_SHADOW_MAP_SIZE,
                touch,
            }
        } else {
            Self {
                sample_count: MSAA_SAMPLES,
                precision: Precision::High,
                shadow_map_size: SHADOW_MAP_SIZE,
                touch,
            }
        }
    }

    pub fn antialias(&self) -> bool {
        self.sample_count > 1
    }

    /// Backing-store pixels per CSS pixel for the canvas.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        if self.touch {
            TOUCH_PIXEL_RATIO
        } else {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        }
    }

    /// WGSL has no precision qualifiers, so the medium tier trades
    /// environment-map resolution instead.
    pub fn env_face_size(&self) -> u32 {
        match self.precision {
            Precision::High => ENV_FACE_SIZE,
            Precision::Medium => ENV_FACE_SIZE / 2,
        }
    }
}
