use super::constants::{MODEL_SPIN_PER_FRAME, MODEL_TARGET_SIZE, MODEL_TILT_X, MODEL_YAW_Y};
use glam::{Mat4, Vec3};

/// Axis-aligned bounding box. `Aabb::empty()` is the identity for `extend`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }
}

/// Presentation transform of the loaded model: recentered on the origin,
/// scaled so its largest dimension is `MODEL_TARGET_SIZE`, tilted toward
/// the camera and spun slowly around Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub center: Vec3,
    pub scale: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl ModelPose {
    pub fn fit(bounds: &Aabb) -> Self {
        let max_dim = bounds.max_dimension();
        let scale = if max_dim > f32::EPSILON {
            MODEL_TARGET_SIZE / max_dim
        } else {
            1.0
        };
        let center = if bounds.is_empty() {
            Vec3::ZERO
        } else {
            bounds.center()
        };
        Self {
            center,
            scale,
            rotation_x: MODEL_TILT_X,
            rotation_y: MODEL_YAW_Y,
        }
    }

    pub fn spin(&mut self) {
        self.rotation_y += MODEL_SPIN_PER_FRAME;
    }

    /// Model-to-world matrix, rotating about the recentered origin.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_translation(-self.center)
    }
}
