//! Shared types used across the snowmill crates.
//!
//! # Invariants
//! - Types here carry no behaviour beyond naming; they are the vocabulary the
//!   camera, input, scene, and render crates agree on.

pub mod types;

pub use types::{Key, MeshId, MoveDirection, PolygonMode};
