//! Scripted Input Source: replays key and mouse input frame by frame.
//!
//! A script is a JSON list of steps:
//! ```text
//! [
//!   { "frames": 30, "hold": ["W"] },
//!   { "press": ["F"] },
//!   { "frames": 10, "mouse": [4.0, 0.0] }
//! ]
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use snowmill_common::Key;
use snowmill_input::{FrameInput, InputState};
use std::path::Path;

/// Errors from loading an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("script has no frames")]
    Empty,
}

fn one() -> u32 {
    1
}

/// A run of identical frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default = "one")]
    pub frames: u32,
    /// Keys held down for the whole step.
    #[serde(default)]
    pub hold: Vec<Key>,
    /// Keys tapped on the step's first frame.
    #[serde(default)]
    pub press: Vec<Key>,
    /// Cursor movement added on every frame of the step.
    #[serde(default)]
    pub mouse: [f32; 2],
}

impl ScriptStep {
    pub fn hold(frames: u32, keys: &[Key]) -> Self {
        Self {
            frames,
            hold: keys.to_vec(),
            press: Vec::new(),
            mouse: [0.0, 0.0],
        }
    }

    pub fn press(keys: &[Key]) -> Self {
        Self {
            frames: 1,
            hold: Vec::new(),
            press: keys.to_vec(),
            mouse: [0.0, 0.0],
        }
    }

    pub fn look(frames: u32, dx: f32, dy: f32) -> Self {
        Self {
            frames,
            hold: Vec::new(),
            press: Vec::new(),
            mouse: [dx, dy],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let data = std::fs::read_to_string(path)?;
        let script = Self::from_json(&data)?;
        tracing::info!(path = %path.display(), frames = script.total_frames(), "loaded script");
        Ok(script)
    }

    pub fn from_json(data: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(data)?;
        if script.total_frames() == 0 {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// A short tour: look around, fly in, switch on fog and snow, start the
    /// bus, peek at the depth map, then quit.
    pub fn demo() -> Self {
        Self::new(vec![
            ScriptStep::look(20, 5.0, 0.0),
            ScriptStep::hold(60, &[Key::W]),
            ScriptStep::press(&[Key::F, Key::P]),
            ScriptStep::hold(30, &[Key::D, Key::K]),
            ScriptStep::press(&[Key::C]),
            ScriptStep::look(20, -3.0, 2.0),
            ScriptStep::hold(20, &[Key::Left, Key::L]),
            ScriptStep::press(&[Key::M]),
            ScriptStep::hold(10, &[Key::S]),
            ScriptStep::press(&[Key::M, Key::Escape]),
        ])
    }

    /// Yield one [`FrameInput`] per frame, expanding steps as they are reached.
    pub fn frames(&self) -> ScriptFrames<'_> {
        ScriptFrames {
            steps: self.steps.iter(),
            current: None,
            frame: 0,
            state: InputState::new(),
        }
    }
}

/// Lazy frame-by-frame expansion of an [`InputScript`].
pub struct ScriptFrames<'a> {
    steps: std::slice::Iter<'a, ScriptStep>,
    current: Option<&'a ScriptStep>,
    frame: u32,
    state: InputState,
}

impl Iterator for ScriptFrames<'_> {
    type Item = FrameInput;

    fn next(&mut self) -> Option<FrameInput> {
        let step = match self.current {
            Some(step) if self.frame < step.frames => step,
            _ => {
                if let Some(done) = self.current.take() {
                    for key in &done.hold {
                        self.state.release(*key);
                    }
                }
                let step = self.steps.by_ref().find(|s| s.frames > 0)?;
                for key in step.hold.iter().chain(&step.press) {
                    self.state.press(*key);
                }
                self.current = Some(step);
                self.frame = 0;
                step
            }
        };

        let mouse = Vec2::from_array(step.mouse);
        if mouse != Vec2::ZERO {
            self.state.mouse_moved(mouse.x, mouse.y);
        }
        let input = self.state.take_frame();
        if self.frame == 0 {
            for key in step.press.iter().filter(|k| !step.hold.contains(*k)) {
                self.state.release(*key);
            }
        }
        self.frame += 1;
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_expand_to_frames() {
        let script = InputScript::new(vec![
            ScriptStep::hold(3, &[Key::W]),
            ScriptStep::press(&[Key::F]),
        ]);
        let frames: Vec<_> = script.frames().collect();
        assert_eq!(frames.len(), 4);
        assert!(frames[0].was_pressed(Key::W));
        assert!(frames[2].is_held(Key::W) && !frames[2].was_pressed(Key::W));
        assert!(!frames[3].is_held(Key::W));
        assert!(frames[3].was_pressed(Key::F));
    }

    #[test]
    fn taps_release_after_first_frame() {
        let script = InputScript::new(vec![ScriptStep {
            frames: 3,
            hold: Vec::new(),
            press: vec![Key::M],
            mouse: [0.0, 0.0],
        }]);
        let frames: Vec<_> = script.frames().collect();
        assert!(frames[0].was_pressed(Key::M));
        assert!(!frames[1].is_held(Key::M));
        assert!(!frames[2].was_pressed(Key::M));
    }

    #[test]
    fn mouse_applies_every_frame() {
        let script = InputScript::new(vec![ScriptStep::look(2, 1.5, -2.0)]);
        assert_eq!(script.frames().count(), 2);
        assert!(script.frames().all(|f| f.mouse_delta == Vec2::new(1.5, -2.0)));
    }

    #[test]
    fn json_steps_default_missing_fields() {
        let script =
            InputScript::from_json(r#"[{"frames": 2, "hold": ["W", "A"]}, {"press": ["Escape"]}]"#)
                .unwrap();
        assert_eq!(script.total_frames(), 3);
        assert_eq!(script.steps[1].frames, 1);
        assert_eq!(script.steps[0].mouse, [0.0, 0.0]);
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(InputScript::from_json("[]"), Err(ScriptError::Empty)));
        assert!(matches!(
            InputScript::from_json(r#"[{"frames": 0}]"#),
            Err(ScriptError::Empty)
        ));
    }

    #[test]
    fn unknown_key_is_a_json_error() {
        assert!(matches!(
            InputScript::from_json(r#"[{"hold": ["Banana"]}]"#),
            Err(ScriptError::Json(_))
        ));
    }

    #[test]
    fn demo_ends_with_quit() {
        let demo = InputScript::demo();
        let last = demo.frames().last().unwrap();
        assert!(last.was_pressed(Key::Escape));
        assert_eq!(demo.frames().count() as u64, demo.total_frames());
    }

    #[test]
    fn zero_frame_steps_are_skipped() {
        let script = InputScript::new(vec![
            ScriptStep::hold(0, &[Key::A]),
            ScriptStep::hold(1, &[Key::W]),
        ]);
        let frames: Vec<_> = script.frames().collect();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_held(Key::W) && !frames[0].is_held(Key::A));
    }

    #[test]
    fn huge_step_expands_lazily() {
        let script = InputScript::new(vec![ScriptStep::hold(u32::MAX, &[Key::W])]);
        let frames: Vec<_> = script.frames().take(3).collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[2].is_held(Key::W));
    }
}
