use super::camera::Camera;
use super::constants::{ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED};
use glam::{Vec2, Vec3};

/// Rotate-around-target camera control with damping. Pan and zoom are not
/// offered: the only gesture is a drag that orbits the camera.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    rotating: bool,
    last_pointer: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            delta_theta: 0.0,
            delta_phi: 0.0,
            rotating: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

impl OrbitControls {
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn begin_rotate(&mut self, x: f32, y: f32) {
        self.rotating = true;
        self.last_pointer = Vec2::new(x, y);
    }

    /// Accumulate a drag. A full element height of travel is one turn.
    pub fn rotate_to(&mut self, x: f32, y: f32, element_height: f32) {
        if !self.rotating {
            return;
        }
        let pointer = Vec2::new(x, y);
        let delta = (pointer - self.last_pointer) * self.rotate_speed;
        self.last_pointer = pointer;
        let height = element_height.max(1.0);
        let turn = 2.0 * std::f32::consts::PI;
        self.delta_theta -= turn * delta.x / height;
        self.delta_phi -= turn * delta.y / height;
    }

    pub fn end_rotate(&mut self) {
        self.rotating = false;
    }

    /// Pending rotation not yet applied to the camera.
    pub fn pending(&self) -> (f32, f32) {
        (self.delta_theta, self.delta_phi)
    }

    /// Apply a damped fraction of the pending rotation to `camera` and
    /// decay the remainder. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * self.damping_factor;
        phi += self.delta_phi * self.damping_factor;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, std::f32::consts::PI - ORBIT_POLAR_EPSILON);

        let sin_phi = phi.sin();
        let next = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );

        self.delta_theta *= 1.0 - self.damping_factor;
        self.delta_phi *= 1.0 - self.damping_factor;

        let moved = next.distance_squared(camera.eye) > 1e-12;
        camera.eye = next;
        camera.target = self.target;
        moved
    }
}
