//! Rendering Adapter: renderer-agnostic frame description.
//!
//! # Invariants
//! - Renderers cannot mutate the camera or the scene.
//! - A frame is derived from exactly one view matrix, taken once per frame.
//! - Normal matrices are the renderer's job, computed per draw from
//!   `view * model`.

mod frame;
mod projection;
mod renderer;

pub use frame::{
    CLEAR_COLOR, DrawCall, Frame, FrameUniforms, GpuDrawUniforms, GpuUniforms, RenderPass,
    SHADOW_MAP_SIZE, light_space_matrix, normal_matrix,
};
pub use projection::Projection;
pub use renderer::{DebugTextRenderer, FrameRecorder, Renderer};

pub fn crate_info() -> &'static str {
    "snowmill-render v0.1.0"
}
