//! Free-fly camera core: facing-vector rotation and flag-driven movement.
//!
//! Orientation is incremental: each look event rotates the *current* front
//! vector about the pitch (X) or yaw (Y) axis. There are no persistent
//! yaw/pitch angles and no pitch clamp.
//!
//! # Invariants
//! - All state lives in plain values ([`CameraState`], [`MovementFlags`])
//!   passed through explicit operations; no hidden shared state.
//! - The raw rotation operations never renormalize their result;
//!   [`FreeCamera`] renormalizes `front` once per look increment.
//! - Degenerate inputs (non-finite angles, near-zero directions) fail fast
//!   with [`CameraError`] instead of propagating NaNs into the view math.
//! - Movement is a fixed step per frame tick, not time-scaled.

mod controller;
mod flags;
mod movement;
mod rotation;
mod state;

pub use controller::{CameraConfig, FreeCamera, DEFAULT_SENSITIVITY, DEFAULT_STEP};
pub use flags::MovementFlags;
pub use movement::apply_movement;
pub use rotation::{rotate_pitch, rotate_yaw};
pub use state::{CameraError, CameraState};
