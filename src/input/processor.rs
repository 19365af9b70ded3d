//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held movement keys, quit request) and the key-binding map. It is the
//! only thing that sits between raw window events and
//! [`OrientedCamera::execute`](crate::camera::OrientedCamera::execute).

use glam::Vec2;

use super::event::InputEvent;
use super::state::InputContext;
use super::KeyAction;
use crate::camera::CameraCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`CameraCommand`]s.
///
/// Pointer motion, scrolling and resizing produce a command immediately.
/// Movement keys are held state: they are polled once per frame through
/// [`movement_commands`](Self::movement_commands) with that frame's
/// elapsed time.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     camera.execute(cmd);
/// }
///
/// // Once per frame:
/// for cmd in input_processor.movement_commands(dt) {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking and held keys.
    context: InputContext,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Set once a key bound to [`KeyAction::Quit`] is pressed.
    quit_requested: bool,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the per-frame input state.
    #[must_use]
    pub fn context(&self) -> &InputContext {
        &self.context
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Whether a quit key has been pressed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self
                .context
                .cursor_delta(*x, *y)
                .filter(|delta| *delta != Vec2::ZERO)
                .map(|delta| CameraCommand::Look { delta }),
            InputEvent::Key { key, pressed } => {
                self.handle_key(key, *pressed);
                None
            }
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Zoom { offset: *delta })
            }
            InputEvent::Resized { width, height } => {
                Some(CameraCommand::Resize {
                    width: *width,
                    height: *height,
                })
            }
            InputEvent::FocusLost => {
                self.context.reset();
                None
            }
        }
    }

    /// One move command per held direction, each covering `dt` seconds.
    #[must_use]
    pub fn movement_commands(&self, dt: f32) -> Vec<CameraCommand> {
        self.context
            .held()
            .map(|direction| CameraCommand::Move { direction, dt })
            .collect()
    }

    /// Key press/release: track held movement keys and quit requests.
    /// Unbound keys are ignored.
    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(action) = self.key_bindings.lookup(key) else {
            return;
        };
        match action.move_direction() {
            Some(direction) if pressed => self.context.press(direction),
            Some(direction) => self.context.release(direction),
            None => {
                if pressed && action == KeyAction::Quit {
                    log::debug!("quit requested via '{key}'");
                    self.quit_requested = true;
                }
            }
        }
    }
}
