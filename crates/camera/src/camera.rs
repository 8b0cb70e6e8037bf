use glam::{Mat4, Vec3};
use snowmill_common::MoveDirection;

/// Fixed world reference axis used to derive the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Squared length below which a look vector counts as zero.
const MIN_LOOK_LENGTH_SQ: f32 = 1e-12;
/// Length below which `front × WORLD_UP` counts as zero.
const MIN_CROSS_LENGTH: f32 = 1e-6;

/// Errors from camera construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("degenerate orientation: {0}")]
    DegenerateOrientation(&'static str),
    #[error("non-finite camera input: {0}")]
    NonFinite(&'static str),
}

/// Orthonormal camera frame derived from the forward vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraBasis {
    /// Derive the frame from a unit forward vector.
    ///
    /// Produces non-finite `right`/`up` when `front` is parallel to world up.
    pub fn from_front(front: Vec3) -> Self {
        let right = front.cross(WORLD_UP).normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }
}

/// Free-flying camera with an eye position and a forward direction.
///
/// Orientation is set from absolute pitch/yaw angles; the basis is recomputed
/// from `front` on every read so it can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingCamera {
    position: Vec3,
    /// Bookkeeping only: mirrors `position + front` after a rotation.
    target: Vec3,
    front: Vec3,
    world_up_hint: Vec3,
}

impl OrbitingCamera {
    /// Create a camera at `position` looking at `target`.
    ///
    /// The basis is always built against [`WORLD_UP`]; `world_up_hint` is kept
    /// for inspection only.
    pub fn new(position: Vec3, target: Vec3, world_up_hint: Vec3) -> Result<Self, CameraError> {
        if !position.is_finite() {
            return Err(CameraError::NonFinite("position"));
        }
        if !target.is_finite() {
            return Err(CameraError::NonFinite("target"));
        }
        if !world_up_hint.is_finite() {
            return Err(CameraError::NonFinite("world up hint"));
        }

        let look = target - position;
        if look.length_squared() < MIN_LOOK_LENGTH_SQ {
            return Err(CameraError::DegenerateOrientation(
                "target coincides with position",
            ));
        }
        let front = look.normalize();
        if front.cross(WORLD_UP).length() < MIN_CROSS_LENGTH {
            return Err(CameraError::DegenerateOrientation(
                "look direction is parallel to world up",
            ));
        }

        tracing::debug!(?position, ?target, ?front, "camera created");
        Ok(Self {
            position,
            target,
            front,
            world_up_hint,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn world_up_hint(&self) -> Vec3 {
        self.world_up_hint
    }

    /// Current orthonormal frame.
    pub fn basis(&self) -> CameraBasis {
        CameraBasis::from_front(self.front)
    }

    pub fn right(&self) -> Vec3 {
        self.basis().right
    }

    pub fn up(&self) -> Vec3 {
        self.basis().up
    }

    /// Teleport the eye without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.target = position + self.front;
        self.position = position;
    }

    /// Right-handed look-at transform along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        let basis = self.basis();
        Mat4::look_at_rh(self.position, self.position + basis.front, basis.up)
    }

    /// Move the eye along the current frame. `speed` is a signed distance;
    /// callers scale it by frame time.
    pub fn move_by(&mut self, direction: MoveDirection, speed: f32) {
        let basis = self.basis();
        match direction {
            MoveDirection::Forward => self.position += basis.front * speed,
            MoveDirection::Backward => self.position -= basis.front * speed,
            MoveDirection::StrafeRight => self.position += basis.right * speed,
            MoveDirection::StrafeLeft => self.position -= basis.right * speed,
        }
        tracing::trace!(?direction, speed, position = ?self.position, "camera moved");
    }

    /// Point the camera along absolute `pitch`/`yaw` angles in degrees.
    ///
    /// Yaw 0 faces +X and yaw 90 faces +Z. No clamping is applied: pitch at
    /// ±90 degrees leaves `front` parallel to world up and the derived basis
    /// degenerate.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
        let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.target = self.position + self.front;
        tracing::trace!(pitch, yaw, front = ?self.front, "camera rotated");
    }

    /// Pitch and yaw in degrees that [`rotate`](Self::rotate) maps to the
    /// current `front`.
    pub fn orientation_angles(&self) -> (f32, f32) {
        let pitch = self.front.y.clamp(-1.0, 1.0).asin().to_degrees();
        let yaw = self.front.z.atan2(self.front.x).to_degrees();
        (pitch, yaw)
    }
}
