use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tunables for everything animated or toggleable in the scene.
///
/// Rates are per second; the viewer scales them by frame time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Point the mill blades spin around.
    pub mill_center: Vec3,
    /// Blade spin rate in radians per second.
    pub mill_spin_rate: f32,
    /// Rate the whole scene turns while a turn key is held, degrees per second.
    pub scene_turn_rate: f32,
    pub bus: BusSettings,
    pub fog: FogSettings,
    pub light: LightSettings,
    pub snow: SnowSettings,
    /// Seed for snowflake placement.
    pub seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            mill_center: Vec3::new(129.457, 33.557, -586.43),
            mill_spin_rate: 0.6,
            scene_turn_rate: 0.6,
            bus: BusSettings::default(),
            fog: FogSettings::default(),
            light: LightSettings::default(),
            snow: SnowSettings::default(),
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSettings {
    /// Point (in model space) the bus turns around when steering.
    pub pivot: Vec3,
    /// Offset along X the bus starts at.
    pub start_offset: f32,
    /// Units per second while a nudge key is held.
    pub nudge_speed: f32,
    /// Units per second once the bus drives on its own.
    pub drive_speed: f32,
    /// Offset at which a driving bus stops.
    pub drive_limit: f32,
    /// Turn applied at the pivot while steering, in degrees.
    pub steer_angle: f32,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            pivot: Vec3::new(59.008, 3.1896, -12.886),
            start_offset: -20.008,
            nudge_speed: 30.0,
            drive_speed: 18.0,
            drive_limit: 40.0,
            steer_angle: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogSettings {
    pub initial_density: f32,
    /// Density the fog jumps to when switched on.
    pub preset_density: f32,
    /// Density change per second while an adjust key is held.
    pub adjust_rate: f32,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            initial_density: 0.0005,
            preset_density: 0.01,
            adjust_rate: 0.006,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Direction towards the light before any turning.
    pub direction: Vec3,
    pub color: Vec3,
    /// Degrees per second while a light key is held.
    pub turn_rate: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, 1.0, 1.0),
            color: Vec3::ONE,
            turn_rate: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowSettings {
    pub flake_count: usize,
    /// Lower corner of the spawn box.
    pub spawn_min: Vec3,
    /// Upper corner of the spawn box; flakes respawn at `spawn_max.y`.
    pub spawn_max: Vec3,
    /// Flakes below this height respawn.
    pub floor_y: f32,
    /// Units per second.
    pub fall_speed: f32,
}

impl Default for SnowSettings {
    fn default() -> Self {
        Self {
            flake_count: 100,
            spawn_min: Vec3::new(82.0, 70.0, -470.0),
            spawn_max: Vec3::new(406.0, 150.0, -98.0),
            floor_y: -20.0,
            fall_speed: 15.0,
        }
    }
}

/// A settings value the scene cannot run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("{0} must be non-negative")]
    Negative(&'static str),
    #[error("snow spawn_min must not exceed spawn_max")]
    InvertedSnowBox,
    #[error("snow floor must lie below the spawn box top")]
    FloorAboveSpawn,
    #[error("fog densities must lie in [0, 1]")]
    FogDensityOutOfRange,
    #[error("light direction must be non-zero")]
    ZeroLightDirection,
}

fn finite(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonFinite(name))
    }
}

fn finite_vec(name: &'static str, value: Vec3) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonFinite(name))
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(SettingsError::Negative(name));
    }
    Ok(())
}

impl SceneSettings {
    /// Check the settings for values the scene cannot work with.
    ///
    /// Signed rates (mill spin, scene turn) may run either way but must be
    /// finite; speeds must also be non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        finite_vec("mill_center", self.mill_center)?;
        finite("mill_spin_rate", self.mill_spin_rate)?;
        finite("scene_turn_rate", self.scene_turn_rate)?;

        let bus = &self.bus;
        finite_vec("bus.pivot", bus.pivot)?;
        finite("bus.start_offset", bus.start_offset)?;
        non_negative("bus.nudge_speed", bus.nudge_speed)?;
        non_negative("bus.drive_speed", bus.drive_speed)?;
        finite("bus.drive_limit", bus.drive_limit)?;
        finite("bus.steer_angle", bus.steer_angle)?;

        let fog = &self.fog;
        if !(0.0..=1.0).contains(&fog.initial_density)
            || !(0.0..=1.0).contains(&fog.preset_density)
        {
            return Err(SettingsError::FogDensityOutOfRange);
        }
        non_negative("fog.adjust_rate", fog.adjust_rate)?;

        let light = &self.light;
        finite_vec("light.direction", light.direction)?;
        finite_vec("light.color", light.color)?;
        if light.direction.length_squared() == 0.0 {
            return Err(SettingsError::ZeroLightDirection);
        }
        non_negative("light.turn_rate", light.turn_rate)?;

        let snow = &self.snow;
        finite_vec("snow.spawn_min", snow.spawn_min)?;
        finite_vec("snow.spawn_max", snow.spawn_max)?;
        finite("snow.floor_y", snow.floor_y)?;
        non_negative("snow.fall_speed", snow.fall_speed)?;
        if snow.spawn_min.cmpgt(snow.spawn_max).any() {
            return Err(SettingsError::InvertedSnowBox);
        }
        if snow.floor_y >= snow.spawn_max.y {
            return Err(SettingsError::FloorAboveSpawn);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SceneSettings::default().validate().is_ok());
    }

    #[test]
    fn inverted_snow_box_is_rejected() {
        let mut s = SceneSettings::default();
        s.snow.spawn_min.x = 1000.0;
        assert_eq!(s.validate(), Err(SettingsError::InvertedSnowBox));
    }

    #[test]
    fn zero_light_is_rejected() {
        let mut s = SceneSettings::default();
        s.light.direction = Vec3::ZERO;
        assert_eq!(s.validate(), Err(SettingsError::ZeroLightDirection));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: SceneSettings =
            serde_json::from_str(r#"{"seed": 7, "fog": {"preset_density": 0.2}}"#).unwrap();
        assert_eq!(s.seed, 7);
        assert_eq!(s.fog.preset_density, 0.2);
        assert_eq!(s.fog.initial_density, FogSettings::default().initial_density);
        assert_eq!(s.bus, BusSettings::default());
    }

    #[test]
    fn infinite_rates_are_rejected() {
        // serde_json reads an over-range literal as infinity.
        let s: SceneSettings = serde_json::from_str(r#"{"mill_spin_rate": 1e39}"#).unwrap();
        assert_eq!(s.validate(), Err(SettingsError::NonFinite("mill_spin_rate")));

        let mut s = SceneSettings::default();
        s.light.turn_rate = f32::NAN;
        assert_eq!(s.validate(), Err(SettingsError::NonFinite("light.turn_rate")));

        let mut s = SceneSettings::default();
        s.bus.steer_angle = f32::NEG_INFINITY;
        assert_eq!(s.validate(), Err(SettingsError::NonFinite("bus.steer_angle")));
    }

    #[test]
    fn nan_fall_speed_is_rejected() {
        let mut s = SceneSettings::default();
        s.snow.fall_speed = f32::NAN;
        assert_eq!(s.validate(), Err(SettingsError::NonFinite("snow.fall_speed")));
    }

    #[test]
    fn negative_speeds_are_rejected() {
        let mut s = SceneSettings::default();
        s.bus.drive_speed = -1.0;
        assert_eq!(s.validate(), Err(SettingsError::Negative("bus.drive_speed")));

        let mut s = SceneSettings::default();
        s.fog.adjust_rate = -0.1;
        assert_eq!(s.validate(), Err(SettingsError::Negative("fog.adjust_rate")));
    }

    #[test]
    fn signed_rates_may_run_backwards() {
        let mut s = SceneSettings::default();
        s.mill_spin_rate = -0.6;
        s.scene_turn_rate = -0.6;
        assert!(s.validate().is_ok());
    }
}
