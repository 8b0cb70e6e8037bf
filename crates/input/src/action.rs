use snowmill_common::{MoveDirection, PolygonMode};

/// A high-level command produced from raw key and mouse input.
///
/// The viewer consumes actions, never raw input events. Continuous actions
/// (movement, fog density, light and scene turning) are emitted once per
/// frame while their key is held; the rest fire on the press edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the camera one step in a direction.
    Move(MoveDirection),
    /// Turn the whole scene about world Y. The sign picks the direction.
    TurnScene(f32),
    /// Switch the rasterization mode.
    SetPolygonMode(PolygonMode),
    /// Enable or disable multisampling.
    SetMultisample(bool),
    /// Slide the bus along its road. The sign picks the direction.
    NudgeBus(f32),
    /// Start the bus driving on its own.
    StartBus,
    /// Whether the bus is currently turned at its pivot.
    SteerBus(bool),
    /// Set fog to its preset density.
    FogOn,
    /// Clear the fog entirely.
    FogOff,
    /// Thicken or thin the fog. The sign picks the direction.
    AdjustFog(f32),
    /// Start or stop the snowfall.
    SetSnow(bool),
    /// Swing the light about world Y. The sign picks the direction.
    TurnLight(f32),
    /// Flip between the lit scene and the depth-map view.
    ToggleDepthMap,
    /// Close the viewer.
    Quit,
}

impl Action {
    /// Whether this action is meant for the camera rather than the scene.
    pub fn is_camera(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_moves_target_the_camera() {
        assert!(Action::Move(MoveDirection::Forward).is_camera());
        assert!(!Action::FogOn.is_camera());
        assert!(!Action::TurnScene(1.0).is_camera());
    }

    #[test]
    fn signed_actions_compare_by_value() {
        assert_eq!(Action::AdjustFog(-1.0), Action::AdjustFog(-1.0));
        assert_ne!(Action::AdjustFog(-1.0), Action::AdjustFog(1.0));
    }
}
