use serde::{Deserialize, Serialize};

/// Direction of a single camera move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

impl MoveDirection {
    /// All directions, in the order the input layer reports them.
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::StrafeLeft,
        MoveDirection::StrafeRight,
    ];
}

/// How triangles are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolygonMode {
    Point,
    Line,
    #[default]
    Fill,
}

/// Device-agnostic key identifier.
///
/// Only the keys the viewer binds are listed. Windowing backends translate
/// their own key codes into these before handing events to the input layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    C,
    F,
    G,
    I,
    J,
    K,
    L,
    M,
    N,
    P,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// The models that make up the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MeshId {
    Scene,
    MillBlades,
    SchoolBus,
    Snowflake,
}

impl MeshId {
    pub const ALL: [MeshId; 4] = [
        MeshId::Scene,
        MeshId::MillBlades,
        MeshId::SchoolBus,
        MeshId::Snowflake,
    ];

    /// Default on-disk location of the OBJ file for this mesh.
    pub fn default_asset_path(self) -> &'static str {
        match self {
            MeshId::Scene => "thetextures/scena1.obj",
            MeshId::MillBlades => "thetextures/mill.obj",
            MeshId::SchoolBus => "thetextures/schoolBus.obj",
            MeshId::Snowflake => "thetextures/snowFlakesBig.obj",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mesh_has_an_obj_path() {
        for mesh in MeshId::ALL {
            assert!(mesh.default_asset_path().ends_with(".obj"));
        }
    }

    #[test]
    fn keys_round_trip_through_json() {
        let json = serde_json::to_string(&[Key::W, Key::Num3, Key::Escape]).unwrap();
        assert_eq!(json, r#"["W","Num3","Escape"]"#);
        let back: Vec<Key> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Key::W, Key::Num3, Key::Escape]);
    }

    #[test]
    fn move_directions_are_distinct() {
        let mut all = MoveDirection::ALL.to_vec();
        all.dedup();
        assert_eq!(all.len(), 4);
    }
}
