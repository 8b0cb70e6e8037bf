use glam::Vec2;

/// Degrees of rotation per pixel of cursor movement.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Pitch is kept this far from straight up or down, in degrees.
pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;

/// Turns per-frame cursor deltas into the absolute pitch/yaw angles the camera
/// takes.
///
/// The camera performs no clamping, so this is where pitch is kept away from
/// ±90 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseLook {
    pitch: f32,
    yaw: f32,
    sensitivity: f32,
    pitch_limit: f32,
}

impl MouseLook {
    /// Start from an existing orientation so the first movement does not snap
    /// the view.
    pub fn new(pitch: f32, yaw: f32, sensitivity: f32, pitch_limit: f32) -> Self {
        let pitch_limit = pitch_limit.abs().min(DEFAULT_PITCH_LIMIT);
        Self {
            pitch: pitch.clamp(-pitch_limit, pitch_limit),
            yaw,
            sensitivity,
            pitch_limit,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Fold a cursor delta into the accumulated angles and return
    /// `(pitch, yaw)` in degrees.
    ///
    /// Moving right turns right (yaw grows); moving down looks down.
    pub fn apply(&mut self, delta: Vec2) -> (f32, f32) {
        self.yaw = (self.yaw + delta.x * self.sensitivity).rem_euclid(360.0);
        self.pitch =
            (self.pitch - delta.y * self.sensitivity).clamp(-self.pitch_limit, self.pitch_limit);
        (self.pitch, self.yaw)
    }
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_SENSITIVITY, DEFAULT_PITCH_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_motion_changes_yaw() {
        let mut look = MouseLook::default();
        let (pitch, yaw) = look.apply(Vec2::new(100.0, 0.0));
        assert_eq!(pitch, 0.0);
        assert!((yaw - 10.0).abs() < 1e-4);
    }

    #[test]
    fn moving_down_looks_down() {
        let mut look = MouseLook::default();
        let (pitch, _) = look.apply(Vec2::new(0.0, 50.0));
        assert!((pitch + 5.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut look = MouseLook::default();
        let (pitch, _) = look.apply(Vec2::new(0.0, -10_000.0));
        assert_eq!(pitch, DEFAULT_PITCH_LIMIT);
        let (pitch, _) = look.apply(Vec2::new(0.0, 10_000.0));
        assert_eq!(pitch, -DEFAULT_PITCH_LIMIT);
    }

    #[test]
    fn limit_never_reaches_vertical() {
        let look = MouseLook::new(120.0, 0.0, 0.1, 180.0);
        assert_eq!(look.pitch(), DEFAULT_PITCH_LIMIT);
    }

    #[test]
    fn yaw_wraps() {
        let mut look = MouseLook::new(0.0, 350.0, 1.0, 89.0);
        let (_, yaw) = look.apply(Vec2::new(20.0, 0.0));
        assert!((yaw - 10.0).abs() < 1e-3);
    }

    #[test]
    fn angles_are_absolute_not_deltas() {
        let mut look = MouseLook::default();
        look.apply(Vec2::new(10.0, 0.0));
        let (_, yaw) = look.apply(Vec2::new(10.0, 0.0));
        assert!((yaw - 2.0).abs() < 1e-4);
    }
}
