use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values. Events are serde-tagged so input scripts can be written as
/// JSON:
///
/// ```json
/// { "type": "cursor_moved", "x": 400.0, "y": 300.0 }
/// { "type": "key", "key": "KeyW", "pressed": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key code string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"Escape"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Viewport resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Window lost keyboard/pointer focus.
    FocusLost,
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Convert a winit window event, or `None` if the camera does not
    /// care about it.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_parse_from_tagged_json() {
        let json = r#"[
            { "type": "cursor_moved", "x": 10.0, "y": 20.5 },
            { "type": "key", "key": "KeyW", "pressed": true },
            { "type": "scroll", "delta": -1.0 },
            { "type": "resized", "width": 800, "height": 600 },
            { "type": "focus_lost" }
        ]"#;
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::CursorMoved { x: 10.0, y: 20.5 },
                InputEvent::Key {
                    key: "KeyW".into(),
                    pressed: true
                },
                InputEvent::Scroll { delta: -1.0 },
                InputEvent::Resized {
                    width: 800,
                    height: 600
                },
                InputEvent::FocusLost,
            ]
        );
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let parsed: Result<InputEvent, _> =
            serde_json::from_str(r#"{ "type": "gamepad", "axis": 1 }"#);
        assert!(parsed.is_err());
    }
}
