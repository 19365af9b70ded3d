//! Input handling: event types, per-frame input state, and the input
//! processor that converts raw window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;
/// Cursor tracking and held movement keys.
pub mod state;

use serde::{Deserialize, Serialize};

pub use event::InputEvent;
pub use processor::InputProcessor;
pub use state::InputContext;

use crate::camera::MoveDirection;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Hold to move along the view direction.
    MoveForward,
    /// Hold to move against the view direction.
    MoveBackward,
    /// Hold to strafe left.
    MoveLeft,
    /// Hold to strafe right.
    MoveRight,
    /// Hold to rise (fly cameras).
    MoveUp,
    /// Hold to sink (fly cameras).
    MoveDown,
    /// Request the host to close.
    Quit,
}

impl KeyAction {
    /// The held-key movement this action drives, if any.
    #[must_use]
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::MoveUp => Some(MoveDirection::Up),
            Self::MoveDown => Some(MoveDirection::Down),
            Self::Quit => None,
        }
    }
}
