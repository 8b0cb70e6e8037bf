use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            aspect: 1024.0 / 768.0,
            near: 0.1,
            far: 50_000.0,
        }
    }
}

impl Projection {
    /// OpenGL-convention perspective matrix (clip depth in `[-1, 1]`).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Follow a surface resize. Zero-sized surfaces (minimized windows) keep
    /// the previous aspect. Returns whether the aspect changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            tracing::warn!(width, height, "ignoring zero-sized resize");
            return false;
        }
        let aspect = width as f32 / height as f32;
        let changed = aspect != self.aspect;
        self.aspect = aspect;
        tracing::debug!(width, height, aspect, "projection resized");
        changed
    }
}
