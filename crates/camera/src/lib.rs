//! Viewer camera: owns the eye position and forward direction and produces a
//! right-handed view transform on demand.
//!
//! # Invariants
//! - `right` and `up` are always derived from `front` and world +Y, never stored.
//! - `front` is unit length after every mutation.
//! - The camera never rolls; it stays upright relative to world +Y.
//! - Camera motion is driven by the caller once or a few times per frame on a
//!   single thread.

mod camera;

pub use camera::{CameraBasis, CameraError, OrbitingCamera, WORLD_UP};
