//! Scene: the animated and toggleable world around the camera.
//!
//! # Invariants
//! - Scene state changes only through explicit actions and time steps.
//! - Given the same settings and the same sequence of calls, the scene evolves
//!   identically, snowfall included.
//! - The renderer reads the scene; it never mutates it.

pub mod atmosphere;
pub mod props;
pub mod scene;
pub mod settings;
pub mod snow;

pub use atmosphere::{Fog, Light};
pub use props::{Bus, Windmill};
pub use scene::{Instance, RenderMode, Scene};
pub use settings::{
    BusSettings, FogSettings, LightSettings, SceneSettings, SettingsError, SnowSettings,
};
pub use snow::Snowfall;

pub fn crate_info() -> &'static str {
    "snowmill-scene v0.1.0"
}
