use glam::Vec2;
use snowmill_common::Key;
use std::collections::BTreeSet;

/// Input gathered over one frame, handed to the viewer's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Keys down at the end of the frame.
    pub held: BTreeSet<Key>,
    /// Keys that went down during the frame.
    pub pressed: BTreeSet<Key>,
    /// Accumulated cursor movement in screen pixels (y grows downward).
    pub mouse_delta: Vec2,
}

impl FrameInput {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn mouse_moved(&self) -> bool {
        self.mouse_delta != Vec2::ZERO
    }
}

/// Records raw key and cursor events as they arrive from the window.
///
/// Uses BTreeSet so actions derived from it come out in a stable order.
#[derive(Debug, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
    pressed: BTreeSet<Key>,
    mouse_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat presses of a held key do not
    /// register a new edge.
    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Accumulate cursor movement, in pixels from the recentred cursor.
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            tracing::warn!(dx, dy, "ignoring non-finite mouse delta");
            return;
        }
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Snapshot this frame's input and reset edge state and the mouse
    /// accumulator. Held keys carry over.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            held: self.held.clone(),
            pressed: std::mem::take(&mut self.pressed),
            mouse_delta: std::mem::take(&mut self.mouse_delta),
        }
    }
}
