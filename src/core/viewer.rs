use super::camera::Camera;
use super::constants::{
    FOG_COLOR_DARK, FOG_COLOR_LIGHT, FOG_LERP_PER_FRAME, MATERIAL_COLOR, MATERIAL_ENV_INTENSITY,
    MATERIAL_METALNESS, MATERIAL_ROUGHNESS, MODEL_PREALLOC_LIMIT, OVERLAY_FADE_DELAY_MS,
    OVERLAY_HIDE_DELAY_MS, VISIBILITY_THRESHOLD,
};
use super::normalize::{Aabb, ModelPose};
use super::orbit::OrbitControls;
use glam::Vec3;

/// Decode an sRGB hex color into linear RGB.
pub fn color_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

pub fn fog_target(dark: bool) -> Vec3 {
    color_from_hex(if dark { FOG_COLOR_DARK } else { FOG_COLOR_LIGHT })
}

/// One frame of the fog transition: move 10% of the way to the theme color.
#[inline]
pub fn fog_step(current: Vec3, dark: bool) -> Vec3 {
    current.lerp(fog_target(dark), FOG_LERP_PER_FRAME)
}

/// CSS width of the progress bar, e.g. `"25%"`. `None` while the total size
/// is unknown.
pub fn progress_width(loaded: f64, total: f64) -> Option<String> {
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    let pct = (loaded / total * 100.0).clamp(0.0, 100.0);
    Some(format!("{}%", pct))
}

/// Preallocation for a streamed body of `content_length` bytes. The header
/// is untrusted, so the hint is capped and junk values allocate nothing.
pub fn body_capacity(content_length: f64) -> usize {
    if !(content_length.is_finite() && content_length > 0.0) {
        return 0;
    }
    content_length.min(MODEL_PREALLOC_LIMIT as f64) as usize
}

/// Uniform surface preset forced onto every mesh of the product model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialPreset {
    pub base_color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub env_intensity: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Default for MaterialPreset {
    fn default() -> Self {
        Self {
            base_color: color_from_hex(MATERIAL_COLOR),
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            env_intensity: MATERIAL_ENV_INTENSITY,
            cast_shadow: true,
            receive_shadow: true,
        }
    }
}

/// Outcome of the asynchronous model load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Pending { fraction: Option<f64> },
    Ready,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Visible,
    Fading,
    Hidden,
}

/// Loading overlay phase `elapsed_ms` after the load settled.
pub fn overlay_phase(elapsed_ms: u32) -> OverlayPhase {
    if elapsed_ms < OVERLAY_FADE_DELAY_MS {
        OverlayPhase::Visible
    } else if elapsed_ms < OVERLAY_FADE_DELAY_MS + OVERLAY_HIDE_DELAY_MS {
        OverlayPhase::Fading
    } else {
        OverlayPhase::Hidden
    }
}

/// Whether an intersection ratio of the hero section counts as on screen.
#[inline]
pub fn is_visible(intersection_ratio: f64) -> bool {
    intersection_ratio >= VISIBILITY_THRESHOLD
}

/// Bookkeeping for the paint-synchronized loop. The loop itself never
/// stops; each tick only decides whether to do frame work.
#[derive(Default, Clone, Copy, Debug)]
pub struct RenderGate {
    pub ticks: u64,
    pub rendered: u64,
}

impl RenderGate {
    /// Count a tick and run `work` when visible. The counters already
    /// include this tick when the result is returned.
    pub fn tick<T, F: FnOnce() -> T>(&mut self, visible: bool, work: F) -> Option<T> {
        self.ticks += 1;
        if !visible {
            return None;
        }
        let out = work();
        self.rendered += 1;
        Some(out)
    }

    pub fn skipped(&self) -> u64 {
        self.ticks - self.rendered
    }
}

/// Everything the viewer needs between frames, free of GPU and DOM handles.
pub struct ViewerState {
    pub camera: Camera,
    pub controls: OrbitControls,
    pub fog_color: Vec3,
    pub material: MaterialPreset,
    pub model: Option<ModelPose>,
    pub status: LoadStatus,
}

impl ViewerState {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::product_shot(aspect),
            controls: OrbitControls::default(),
            fog_color: color_from_hex(FOG_COLOR_LIGHT),
            material: MaterialPreset::default(),
            model: None,
            status: LoadStatus::Pending { fraction: None },
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    /// Record a progress event; returns the bar width to display.
    pub fn on_progress(&mut self, loaded: f64, total: f64) -> Option<String> {
        let width = progress_width(loaded, total)?;
        if let LoadStatus::Pending { fraction } = &mut self.status {
            *fraction = Some((loaded / total).clamp(0.0, 1.0));
        }
        Some(width)
    }

    pub fn place_model(&mut self, bounds: &Aabb) -> ModelPose {
        let pose = ModelPose::fit(bounds);
        self.model = Some(pose);
        self.status = LoadStatus::Ready;
        pose
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = LoadStatus::Failed(reason.into());
    }

    /// Per-frame update: damping, fog transition and the idle spin.
    pub fn advance(&mut self, dark: bool) {
        self.controls.update(&mut self.camera);
        self.fog_color = fog_step(self.fog_color, dark);
        if let Some(pose) = &mut self.model {
            pose.spin();
        }
    }
}
