use crate::settings::{FogSettings, LightSettings};
use glam::{Quat, Vec3};

/// Exponential fog density sent to the shader. Always within `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fog {
    density: f32,
    preset: f32,
    adjust_rate: f32,
}

impl Fog {
    pub fn new(settings: &FogSettings) -> Self {
        Self {
            density: settings.initial_density.clamp(0.0, 1.0),
            preset: settings.preset_density.clamp(0.0, 1.0),
            adjust_rate: settings.adjust_rate,
        }
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn enable(&mut self) {
        self.density = self.preset;
    }

    pub fn disable(&mut self) {
        self.density = 0.0;
    }

    /// Thicken (`sign > 0`) or thin (`sign < 0`) the fog over `dt` seconds.
    pub fn adjust(&mut self, sign: f32, dt: f32) {
        self.density = (self.density + sign * self.adjust_rate * dt).clamp(0.0, 1.0);
    }
}

/// The single directional light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    base_direction: Vec3,
    color: Vec3,
    /// Degrees about world Y.
    angle: f32,
    turn_rate: f32,
}

impl Light {
    pub fn new(settings: &LightSettings) -> Self {
        Self {
            base_direction: settings.direction.normalize_or(Vec3::Y),
            color: settings.color,
            angle: 0.0,
            turn_rate: settings.turn_rate,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn turn(&mut self, sign: f32, dt: f32) {
        self.angle = (self.angle + sign * self.turn_rate * dt).rem_euclid(360.0);
    }

    /// Unit direction towards the light.
    pub fn direction(&self) -> Vec3 {
        (Quat::from_rotation_y(self.angle.to_radians()) * self.base_direction).normalize()
    }
}
