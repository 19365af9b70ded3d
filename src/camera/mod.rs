//! Camera system for first-person scene viewing.
//!
//! Provides a yaw/pitch fly camera with look-at and perspective
//! transforms, and the command vocabulary the input layer drives it with.

/// Camera mutations produced by the input layer.
pub mod command;
/// Core camera struct and GPU uniform type.
pub mod core;
/// Look-at constructions and basis checks.
pub mod look_at;

pub use self::command::{CameraCommand, MoveDirection};
pub use self::core::{
    CameraUniform, DepthRange, MovePolicy, OrientedCamera, MAX_FOVY, MIN_FOVY,
    PITCH_LIMIT,
};
