use crate::frame::{Frame, RenderPass, SHADOW_MAP_SIZE};
use snowmill_common::MeshId;
use std::fmt::Write as _;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a fully built [`Frame`]; it never touches the camera
/// or the scene directly.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, frame: &Frame) -> Self::Output;
}

/// Produces a human-readable description of each frame.
///
/// Stands in for a GPU backend in the CLI, logs, and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, frame: &Frame) -> String {
        let u = &frame.uniforms;
        let mut out = String::new();
        let pass = match frame.pass {
            RenderPass::Scene => "scene".to_string(),
            RenderPass::DepthMap => format!("depth-map {SHADOW_MAP_SIZE}x{SHADOW_MAP_SIZE}"),
        };
        let _ = writeln!(
            out,
            "=== Frame {} ({pass}, {:?}, msaa={}) ===",
            frame.index, frame.polygon, frame.multisample
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2})",
            frame.eye.x, frame.eye.y, frame.eye.z
        );
        // Forward is the negated third row of the view rotation.
        let fwd = -u.view.row(2).truncate();
        let _ = writeln!(out, "  front=({:.3}, {:.3}, {:.3})", fwd.x, fwd.y, fwd.z);
        let _ = writeln!(
            out,
            "Light: dir=({:.3}, {:.3}, {:.3}) color=({:.2}, {:.2}, {:.2})",
            u.light_dir.x,
            u.light_dir.y,
            u.light_dir.z,
            u.light_color.x,
            u.light_color.y,
            u.light_color.z
        );
        let _ = writeln!(out, "Fog: density={:.4}", u.fog_density);
        let _ = writeln!(out, "Draws: {}", frame.draws.len());
        for mesh in MeshId::ALL {
            let n = frame.count(mesh);
            if n > 0 {
                let _ = writeln!(out, "  {mesh:?} x{n}");
            }
        }
        out
    }
}

/// Keeps every frame it is given. Useful for inspecting a headless run.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Renderer for FrameRecorder {
    type Output = ();

    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
