use crate::settings::BusSettings;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Model matrix rotating by `rotation` around `pivot` instead of the origin.
fn rotate_about(pivot: Vec3, rotation: Mat4) -> Mat4 {
    Mat4::from_translation(pivot) * rotation * Mat4::from_translation(-pivot)
}

/// The windmill's blades, spinning about world X around their hub.
#[derive(Debug, Clone, PartialEq)]
pub struct Windmill {
    center: Vec3,
    spin_rate: f32,
    /// Radians, kept within `[0, TAU)`.
    angle: f32,
}

impl Windmill {
    pub fn new(center: Vec3, spin_rate: f32) -> Self {
        Self {
            center,
            spin_rate,
            angle: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + self.spin_rate * dt).rem_euclid(TAU);
    }

    pub fn model_matrix(&self) -> Mat4 {
        rotate_about(self.center, Mat4::from_rotation_x(self.angle))
    }
}

/// The school bus: nudged along X by hand, or driven until it reaches its
/// stopping point, and optionally turned at its pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    settings: BusSettings,
    offset: f32,
    driving: bool,
    steering: bool,
}

impl Bus {
    pub fn new(settings: &BusSettings) -> Self {
        Self {
            settings: settings.clone(),
            offset: settings.start_offset,
            driving: false,
            steering: false,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_driving(&self) -> bool {
        self.driving
    }

    pub fn is_steering(&self) -> bool {
        self.steering
    }

    pub fn nudge(&mut self, sign: f32, dt: f32) {
        self.offset += sign * self.settings.nudge_speed * dt;
    }

    /// Start driving. A bus already at or past its stopping point stays put.
    pub fn start(&mut self) {
        if self.offset < self.settings.drive_limit {
            self.driving = true;
            tracing::debug!(offset = self.offset, "bus started");
        }
    }

    pub fn steer(&mut self, steering: bool) {
        self.steering = steering;
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.driving {
            return;
        }
        self.offset += self.settings.drive_speed * dt;
        if self.offset >= self.settings.drive_limit {
            self.offset = self.settings.drive_limit;
            self.driving = false;
            tracing::debug!(offset = self.offset, "bus stopped");
        }
    }

    /// Identity at the start offset with no steering.
    pub fn model_matrix(&self) -> Mat4 {
        let travel = Mat4::from_translation(Vec3::new(
            self.offset - self.settings.start_offset,
            0.0,
            0.0,
        ));
        if self.steering {
            let turn = Mat4::from_rotation_y(self.settings.steer_angle.to_radians());
            travel * rotate_about(self.settings.pivot, turn)
        } else {
            travel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windmill_keeps_hub_fixed() {
        let mut mill = Windmill::new(Vec3::new(129.457, 33.557, -586.43), 0.6);
        mill.advance(2.0);
        let hub = mill.model_matrix().transform_point3(Vec3::new(129.457, 33.557, -586.43));
        assert!(hub.abs_diff_eq(Vec3::new(129.457, 33.557, -586.43), 1e-3));
    }

    #[test]
    fn windmill_angle_wraps() {
        let mut mill = Windmill::new(Vec3::ZERO, 1.0);
        mill.advance(TAU + 0.5);
        assert!((mill.angle() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn windmill_blade_tip_moves() {
        let mut mill = Windmill::new(Vec3::ZERO, 1.0);
        mill.advance(std::f32::consts::FRAC_PI_2);
        let tip = mill.model_matrix().transform_point3(Vec3::Y);
        assert!(tip.abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn bus_starts_at_identity() {
        let bus = Bus::new(&BusSettings::default());
        assert!(bus.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn bus_drives_to_its_limit_and_stops() {
        let settings = BusSettings::default();
        let mut bus = Bus::new(&settings);
        bus.start();
        assert!(bus.is_driving());
        for _ in 0..1000 {
            bus.advance(0.1);
        }
        assert!(!bus.is_driving());
        assert_eq!(bus.offset(), settings.drive_limit);
    }

    #[test]
    fn bus_past_limit_does_not_start() {
        let mut bus = Bus::new(&BusSettings::default());
        bus.nudge(1.0, 100.0);
        bus.start();
        assert!(!bus.is_driving());
    }

    #[test]
    fn steering_keeps_pivot_in_place() {
        let settings = BusSettings::default();
        let mut bus = Bus::new(&settings);
        bus.steer(true);
        let pivot = bus.model_matrix().transform_point3(settings.pivot);
        assert!(pivot.abs_diff_eq(settings.pivot, 1e-3));
        let elsewhere = settings.pivot + Vec3::X * 5.0;
        let moved = bus.model_matrix().transform_point3(elsewhere);
        assert!(!moved.abs_diff_eq(elsewhere, 1e-2));
    }

    #[test]
    fn nudge_translates_along_x() {
        let mut bus = Bus::new(&BusSettings::default());
        bus.nudge(-1.0, 0.5);
        let origin = bus.model_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(-15.0, 0.0, 0.0), 1e-4));
    }
}
