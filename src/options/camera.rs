use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{DepthRange, MovePolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement, projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees (-90 faces -Z).
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees, clamped to ±89.
    #[schemars(skip)]
    pub pitch: f32,
    /// World up reference; normalized on construction.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 80.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Degrees of yaw per pixel of horizontal pointer motion.
    #[schemars(title = "Yaw Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub yaw_sensitivity: f32,
    /// Degrees of pitch per pixel of vertical pointer motion.
    #[schemars(title = "Pitch Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub pitch_sensitivity: f32,
    /// Free flight or ground-locked walking.
    #[schemars(title = "Movement")]
    pub move_policy: MovePolicy,
    /// Clip-space depth convention of the graphics API.
    #[schemars(skip)]
    pub depth_range: DepthRange,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            world_up: [0.0, 1.0, 0.0],
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
            move_speed: 2.5,
            yaw_sensitivity: 0.5,
            pitch_sensitivity: 0.5,
            move_policy: MovePolicy::Fly,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}
