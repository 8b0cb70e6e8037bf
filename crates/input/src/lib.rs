//! Input Source: raw key and cursor events turned into viewer actions.
//!
//! # Invariants
//! - The viewer consumes [`Action`]s and absolute look angles, never raw events.
//! - Per-frame input is an explicit [`FrameInput`] value; there is no global
//!   key table.

pub mod action;
pub mod bindings;
pub mod look;
pub mod state;

pub use action::Action;
pub use bindings::Bindings;
pub use look::{DEFAULT_PITCH_LIMIT, DEFAULT_SENSITIVITY, MouseLook};
pub use state::{FrameInput, InputState};

pub fn crate_info() -> &'static str {
    "snowmill-input v0.1.0"
}
