//! Viewer configuration, stored as JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use snowmill_common::MeshId;
use snowmill_input::{DEFAULT_PITCH_LIMIT, DEFAULT_SENSITIVITY};
use snowmill_render::Projection;
use snowmill_scene::{SceneSettings, SettingsError};
use std::path::{Path, PathBuf};

/// Errors from loading, saving, or validating a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    #[error("invalid scene settings: {0}")]
    Scene(#[from] SettingsError),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub scene: SceneSettings,
    pub assets: AssetPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Snowmill".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub world_up: Vec3,
    /// Units per second while a move key is held.
    pub move_speed: f32,
    /// Degrees per pixel of cursor movement.
    pub mouse_sensitivity: f32,
    /// Maximum pitch magnitude in degrees.
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(383.63, 10.25, -336.082),
            target: Vec3::new(0.0, 0.0, -10.0),
            world_up: Vec3::Y,
            move_speed: 120.0,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let p = Projection::default();
        Self {
            fov_degrees: p.fov_degrees,
            near: p.near,
            far: p.far,
        }
    }
}

/// Where each model's OBJ file lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub scene: PathBuf,
    pub mill_blades: PathBuf,
    pub school_bus: PathBuf,
    pub snowflake: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            scene: MeshId::Scene.default_asset_path().into(),
            mill_blades: MeshId::MillBlades.default_asset_path().into(),
            school_bus: MeshId::SchoolBus.default_asset_path().into(),
            snowflake: MeshId::Snowflake.default_asset_path().into(),
        }
    }
}

impl AssetPaths {
    pub fn path(&self, mesh: MeshId) -> &Path {
        match mesh {
            MeshId::Scene => &self.scene,
            MeshId::MillBlades => &self.mill_blades,
            MeshId::SchoolBus => &self.school_bus,
            MeshId::Snowflake => &self.snowflake,
        }
    }
}

impl ViewerConfig {
    /// Read a config file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        serde_json::to_writer_pretty(std::fs::File::create(path)?, self)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the viewer cannot run with. Camera orientation is
    /// checked when the camera is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &'static str| Err(ConfigError::Invalid(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        let p = &self.projection;
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return invalid("fov_degrees must lie in (0, 180)");
        }
        if !(p.near > 0.0 && p.far > p.near) {
            return invalid("projection needs 0 < near < far");
        }
        let c = &self.camera;
        if !c.move_speed.is_finite() || c.move_speed < 0.0 {
            return invalid("camera move_speed must be finite and non-negative");
        }
        if !c.mouse_sensitivity.is_finite() {
            return invalid("camera mouse_sensitivity must be finite");
        }
        if !c.pitch_limit.is_finite() || c.pitch_limit <= 0.0 {
            return invalid("camera pitch_limit must be positive");
        }
        self.scene.validate()?;
        Ok(())
    }

    /// Projection for the configured window.
    pub fn build_projection(&self) -> Projection {
        Projection {
            fov_degrees: self.projection.fov_degrees,
            aspect: self.window.width as f32 / self.window.height as f32,
            near: self.projection.near,
            far: self.projection.far,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ViewerConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.camera.mouse_sensitivity, 0.1);
        assert_eq!(c.assets.path(MeshId::SchoolBus), Path::new("thetextures/schoolBus.obj"));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("snowmill.json");
        let mut c = ViewerConfig::default();
        c.window.width = 1920;
        c.scene.seed = 99;
        c.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded, c);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("partial.json");
        std::fs::write(&path, r#"{"camera": {"move_speed": 5.0}}"#).unwrap();
        let c = ViewerConfig::load(&path).unwrap();
        assert_eq!(c.camera.move_speed, 5.0);
        assert_eq!(c.camera.position, CameraConfig::default().position);
        assert_eq!(c.window, WindowConfig::default());
    }

    #[test]
    fn invalid_projection_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"projection": {"near": 10.0, "far": 1.0}}"#).unwrap();
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn over_range_scene_rate_is_rejected_on_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("spin.json");
        std::fs::write(&path, r#"{"scene": {"mill_spin_rate": 1e39}}"#).unwrap();
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Scene(SettingsError::NonFinite("mill_spin_rate"))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ViewerConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "{ not json").unwrap();
        let err = ViewerConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn projection_follows_window() {
        let mut c = ViewerConfig::default();
        c.window.width = 800;
        c.window.height = 400;
        assert_eq!(c.build_projection().aspect, 2.0);
    }
}
