//! Camera placement and the looping orbit animation.

use mobius_kernel_math::{Point3, Tolerance, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// Camera eye position. The camera always looks at the origin with `+Z` up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye x.
    pub x: f64,
    /// Eye y.
    pub y: f64,
    /// Eye z.
    pub z: f64,
}

impl Camera {
    /// Camera with the eye at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Eye position as a point.
    pub fn eye(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    /// Orthographic screen coordinates of `p` as seen from this camera.
    ///
    /// Returns `(right, up)` components; depth is discarded.
    pub fn project(&self, p: &Point3) -> (f64, f64) {
        let forward = (-self.eye().coords).normalize();
        let mut right = forward.cross(&Vec3::z());
        if Tolerance::DEFAULT.is_zero(right.norm()) {
            // Looking straight down or up
            right = Vec3::x();
        }
        let right = right.normalize();
        let up = right.cross(&forward);
        (p.coords.dot(&right), p.coords.dot(&up))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.25, 1.25, 1.25)
    }
}

/// A circular camera path around the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOrbit {
    /// Frames per full revolution.
    pub steps: usize,
    /// Horizontal distance of the eye from the Z axis.
    pub radius: f64,
    /// Eye height.
    pub height: f64,
    /// Time each frame is shown.
    pub frame_duration_ms: u64,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            steps: 60,
            radius: 1.5,
            height: 0.6,
            frame_duration_ms: 50,
        }
    }
}

impl CameraOrbit {
    /// Camera for frame `i`, at angle `i · 360° / steps`.
    pub fn camera(&self, i: usize) -> Camera {
        let angle = (i as f64 * 360.0 / self.steps as f64).to_radians();
        let start = Point3::new(self.radius, 0.0, self.height);
        let eye = Transform::rotation_z(angle).apply_point(&start);
        Camera::new(eye.x, eye.y, eye.z)
    }

    /// One camera per step, covering a full revolution without repeating
    /// the starting frame.
    pub fn frames(&self) -> Vec<Camera> {
        (0..self.steps).map(|i| self.camera(i)).collect()
    }
}
