//! Orbit camera for the 3D view.

use glam::{Mat4, Vec3};

use crate::visuals::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION};

const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 500.0;
const PITCH_LIMIT: f32 = 1.5;

/// Orbit camera circling a target point.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
}

impl Camera {
    /// Camera at the default viewpoint, looking at the origin.
    pub fn new() -> Self {
        Self::looking_from(CAMERA_POSITION, Vec3::ZERO)
    }

    /// Place the camera at `eye`, orbiting `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal),
            distance,
            target,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOV_DEGREES.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }

    /// Rotate around the target. Pitch stops short of the poles.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the orbit distance; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 - steps * 0.1)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Camera basis in world space: (right, up, back).
    ///
    /// Used to billboard sphere impostors towards the viewer.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let back = (self.position() - self.target).normalize_or(Vec3::Z);
        let right = Vec3::Y.cross(back).normalize_or(Vec3::X);
        let up = back.cross(right);
        (right, up, back)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() {
        let camera = Camera::new();
        assert!((camera.position() - CAMERA_POSITION).length() < 1e-3);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new();
        camera.zoom(100.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new();
        let before = camera.distance;
        camera.orbit(0.7, 10.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        assert!(((camera.position() - camera.target).length() - before).abs() < 1e-3);
    }

    #[test]
    fn test_basis_orthonormal() {
        let (right, up, back) = Camera::new().basis();
        assert!(right.dot(up).abs() < 1e-5);
        assert!(right.dot(back).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(up.y > 0.0);
    }
}
