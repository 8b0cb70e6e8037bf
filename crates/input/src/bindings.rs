use crate::action::Action;
use crate::state::FrameInput;
use snowmill_common::{Key, MoveDirection, PolygonMode};

/// Maps keys to actions.
///
/// Held bindings fire every frame the key is down; press bindings fire once on
/// the key-down edge. The steer key reports its level every frame so the bus
/// straightens as soon as the key is let go.
#[derive(Debug, Clone)]
pub struct Bindings {
    held: Vec<(Key, Action)>,
    pressed: Vec<(Key, Action)>,
    steer: Option<Key>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            held: vec![
                (Key::W, Action::Move(MoveDirection::Forward)),
                (Key::S, Action::Move(MoveDirection::Backward)),
                (Key::A, Action::Move(MoveDirection::StrafeLeft)),
                (Key::D, Action::Move(MoveDirection::StrafeRight)),
                (Key::Q, Action::TurnScene(1.0)),
                (Key::E, Action::TurnScene(-1.0)),
                (Key::Up, Action::NudgeBus(1.0)),
                (Key::Down, Action::NudgeBus(-1.0)),
                (Key::K, Action::AdjustFog(1.0)),
                (Key::N, Action::AdjustFog(-1.0)),
                (Key::J, Action::TurnLight(-1.0)),
                (Key::L, Action::TurnLight(1.0)),
            ],
            pressed: vec![
                (Key::Num1, Action::SetPolygonMode(PolygonMode::Point)),
                (Key::Num2, Action::SetPolygonMode(PolygonMode::Line)),
                (Key::Num3, Action::SetPolygonMode(PolygonMode::Fill)),
                (Key::Num4, Action::SetMultisample(true)),
                (Key::Num5, Action::SetMultisample(false)),
                (Key::C, Action::StartBus),
                (Key::F, Action::FogOn),
                (Key::G, Action::FogOff),
                (Key::P, Action::SetSnow(true)),
                (Key::I, Action::SetSnow(false)),
                (Key::M, Action::ToggleDepthMap),
                (Key::Escape, Action::Quit),
            ],
            steer: Some(Key::Left),
        }
    }
}

impl Bindings {
    /// A binding set with nothing bound.
    pub fn empty() -> Self {
        Self {
            held: Vec::new(),
            pressed: Vec::new(),
            steer: None,
        }
    }

    /// Bind `action` to fire every frame `key` is held. Replaces any existing
    /// binding for `key`.
    pub fn bind_held(&mut self, key: Key, action: Action) {
        self.unbind(key);
        self.held.push((key, action));
    }

    /// Bind `action` to fire once when `key` goes down. Replaces any existing
    /// binding for `key`.
    pub fn bind_pressed(&mut self, key: Key, action: Action) {
        self.unbind(key);
        self.pressed.push((key, action));
    }

    pub fn bind_steer(&mut self, key: Key) {
        self.unbind(key);
        self.steer = Some(key);
    }

    /// Remove every binding for `key`.
    pub fn unbind(&mut self, key: Key) {
        self.held.retain(|(k, _)| *k != key);
        self.pressed.retain(|(k, _)| *k != key);
        if self.steer == Some(key) {
            self.steer = None;
        }
    }

    /// Translate one frame of input into actions.
    ///
    /// Press actions come first in binding order, then held actions, then the
    /// steer level.
    pub fn actions(&self, input: &FrameInput) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .pressed
            .iter()
            .filter(|(key, _)| input.was_pressed(*key))
            .map(|(_, action)| *action)
            .collect();

        actions.extend(
            self.held
                .iter()
                .filter(|(key, _)| input.is_held(*key))
                .map(|(_, action)| *action),
        );

        if let Some(key) = self.steer {
            actions.push(Action::SteerBus(input.is_held(key)));
        }

        tracing::trace!(count = actions.len(), "mapped frame input");
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InputState;

    fn frame_with(keys: &[Key]) -> FrameInput {
        let mut input = InputState::new();
        for k in keys {
            input.press(*k);
        }
        input.take_frame()
    }

    #[test]
    fn wasd_maps_to_moves() {
        let b = Bindings::default();
        let actions = b.actions(&frame_with(&[Key::W, Key::D]));
        assert!(actions.contains(&Action::Move(MoveDirection::Forward)));
        assert!(actions.contains(&Action::Move(MoveDirection::StrafeRight)));
        assert!(!actions.contains(&Action::Move(MoveDirection::Backward)));
    }

    #[test]
    fn press_bindings_fire_only_on_edge() {
        let b = Bindings::default();
        let mut input = InputState::new();
        input.press(Key::M);
        let first = b.actions(&input.take_frame());
        assert!(first.contains(&Action::ToggleDepthMap));
        let second = b.actions(&input.take_frame());
        assert!(!second.contains(&Action::ToggleDepthMap));
    }

    #[test]
    fn held_bindings_repeat_every_frame() {
        let b = Bindings::default();
        let mut input = InputState::new();
        input.press(Key::K);
        for _ in 0..3 {
            let actions = b.actions(&input.take_frame());
            assert!(actions.contains(&Action::AdjustFog(1.0)));
        }
    }

    #[test]
    fn steer_level_is_always_reported() {
        let b = Bindings::default();
        let idle = b.actions(&FrameInput::default());
        assert_eq!(idle, vec![Action::SteerBus(false)]);
        let steering = b.actions(&frame_with(&[Key::Left]));
        assert!(steering.contains(&Action::SteerBus(true)));
    }

    #[test]
    fn press_actions_precede_held_actions() {
        let b = Bindings::default();
        let actions = b.actions(&frame_with(&[Key::W, Key::Escape]));
        assert_eq!(actions[0], Action::Quit);
        assert_eq!(actions[1], Action::Move(MoveDirection::Forward));
    }

    #[test]
    fn rebinding_replaces_previous_binding() {
        let mut b = Bindings::empty();
        b.bind_held(Key::Right, Action::Move(MoveDirection::StrafeRight));
        b.bind_pressed(Key::Right, Action::Quit);
        let actions = b.actions(&frame_with(&[Key::Right]));
        assert_eq!(actions, vec![Action::Quit]);
    }
}
