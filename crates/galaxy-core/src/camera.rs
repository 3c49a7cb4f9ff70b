//! Camera rig and damped orbit controls.
//!
//! The camera sits at a local offset inside a rig node. Scrolling moves the
//! rig; dragging orbits the camera's local offset around the origin.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    /// Position relative to the rig.
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: CAMERA_LOCAL_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub camera: PerspectiveCamera,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            camera: PerspectiveCamera::new(aspect),
        }
    }

    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = (width / height) as f32;
        }
    }

    /// World-space camera position.
    pub fn eye(&self) -> Vec3 {
        self.position + self.camera.position
    }

    /// View matrix; the camera keeps facing its target from wherever the rig carries it.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.camera.target, self.camera.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }
}

/// Drag-to-orbit with exponential damping.
///
/// Pointer drags accumulate angular deltas; every [`OrbitControls::update`]
/// applies a `damping` fraction of what is pending and decays the rest, so the
/// camera glides to a stop after release.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub damping: f32,
    pub rotate_speed: f32,
    theta_delta: f32,
    phi_delta: f32,
    last_pointer: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            theta_delta: 0.0,
            phi_delta: 0.0,
            last_pointer: None,
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.last_pointer = Some(Vec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, client_height: f32) {
        let Some(last) = self.last_pointer else {
            return;
        };
        let now = Vec2::new(x, y);
        let d = now - last;
        let h = client_height.max(1.0);
        self.theta_delta -= TAU * d.x / h * self.rotate_speed;
        self.phi_delta -= TAU * d.y / h * self.rotate_speed;
        self.last_pointer = Some(now);
    }

    pub fn pointer_up(&mut self) {
        self.last_pointer = None;
    }

    /// Advance one frame. Returns true when the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if self.theta_delta.abs() < 1e-9 && self.phi_delta.abs() < 1e-9 {
            return false;
        }
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.theta_delta * self.damping;
        phi += self.phi_delta * self.damping;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let next = camera.target
            + Vec3::new(
                radius * sin_phi * sin_theta,
                radius * cos_phi,
                radius * sin_phi * cos_theta,
            );

        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;

        let moved = (next - camera.position).length_squared() > 1e-12;
        camera.position = next;
        moved
    }
}
