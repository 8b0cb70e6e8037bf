//! Viewer: the application driver tying camera, input, scene, and renderer
//! together.
//!
//! # Invariants
//! - One owned camera and one owned scene; no ambient globals.
//! - Input arrives as an explicit per-frame value.
//! - Movement is scaled by frame time at the call site, never inside the camera.

pub mod config;
pub mod script;
mod viewer;

pub use config::{
    AssetPaths, CameraConfig, ConfigError, ProjectionConfig, ViewerConfig, WindowConfig,
};
pub use script::{InputScript, ScriptError, ScriptFrames, ScriptStep};
pub use viewer::{Viewer, ViewerError};

pub fn crate_info() -> &'static str {
    "snowmill-viewer v0.1.0"
}
