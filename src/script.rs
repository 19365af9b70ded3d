//! Recorded input replayed frame by frame through a [`FlySession`].
//!
//! Scripts are JSON:
//!
//! ```json
//! { "frames": [
//!     { "dt": 0.016, "events": [ { "type": "key", "key": "KeyW", "pressed": true } ] },
//!     { "dt": 0.016 }
//! ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FlycamError;
use crate::input::InputEvent;
use crate::session::{FlySession, FrameMatrices};

/// Events delivered before one frame, and that frame's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// Frame time in seconds.
    pub dt: f32,
    /// Events delivered before the frame is stepped.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// A sequence of frames to replay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    /// Frames in playback order.
    pub frames: Vec<ScriptFrame>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySummary {
    /// Frames actually stepped.
    pub frames_played: usize,
    /// Whether playback stopped on a quit key.
    pub quit: bool,
    /// Transforms after the last stepped frame.
    pub last: FrameMatrices,
}

impl InputScript {
    /// Parse a script from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, FlycamError> {
        serde_json::from_str(content)
            .map_err(|e| FlycamError::ScriptParse(e.to_string()))
    }

    /// Load a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path)?;
        let script = Self::from_json_str(&content)?;
        log::info!(
            "Loaded input script '{}' ({} frames)",
            path.display(),
            script.frames.len()
        );
        Ok(script)
    }

    /// Feed every frame through `session`, stopping early once a quit key
    /// is pressed.
    pub fn replay(&self, session: &mut FlySession) -> ReplaySummary {
        let mut summary = ReplaySummary {
            frames_played: 0,
            quit: false,
            last: session.matrices(),
        };
        for (index, frame) in self.frames.iter().enumerate() {
            for event in &frame.events {
                session.handle_event(event);
            }
            if session.quit_requested() {
                log::info!("quit requested before frame {index}");
                summary.quit = true;
                break;
            }
            summary.last = session.advance(frame.dt);
            summary.frames_played += 1;
            let camera = session.camera();
            log::debug!(
                "frame {index}: pos {:?} yaw {:.2} pitch {:.2} fovy {:.1}",
                camera.position(),
                camera.yaw(),
                camera.pitch(),
                camera.fovy()
            );
        }
        summary
    }
}
