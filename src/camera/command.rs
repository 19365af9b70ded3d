//! The camera's complete interactive vocabulary.
//!
//! Every mutation driven by the input layer is expressed as a
//! [`CameraCommand`] and applied through [`OrientedCamera::execute`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::core::OrientedCamera;

/// Direction of a translation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Strafe against the right axis.
    Left,
    /// Strafe along the right axis.
    Right,
    /// Along world up (fly cameras only).
    Up,
    /// Against world up (fly cameras only).
    Down,
}

impl MoveDirection {
    /// Every direction, in the order per-frame moves are applied.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// A single camera mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Turn by raw pointer deltas in pixels (screen Y down).
    Look {
        /// Pointer motion since the previous cursor event.
        delta: Vec2,
    },
    /// Translate for one frame.
    Move {
        /// Which way to go.
        direction: MoveDirection,
        /// Frame time in seconds.
        dt: f32,
    },
    /// Scroll zoom (positive = zoom in).
    Zoom {
        /// Degrees to subtract from the field of view.
        offset: f32,
    },
    /// Viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

impl OrientedCamera {
    /// Apply one command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Look { delta } => self.adjust_look(delta.x, delta.y),
            CameraCommand::Move { direction, dt } => match direction {
                MoveDirection::Forward => self.move_forward(dt),
                MoveDirection::Backward => self.move_backward(dt),
                MoveDirection::Left => self.move_left(dt),
                MoveDirection::Right => self.move_right(dt),
                MoveDirection::Up => self.move_up(dt),
                MoveDirection::Down => self.move_down(dt),
            },
            CameraCommand::Zoom { offset } => self.zoom(offset),
            CameraCommand::Resize { width, height } => self.resize(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn execute_dispatches_to_camera_operations() {
        let mut via_commands = OrientedCamera::new(1.0);
        let mut direct = OrientedCamera::new(1.0);

        via_commands.execute(CameraCommand::Look {
            delta: Vec2::new(12.0, -4.0),
        });
        direct.adjust_look(12.0, -4.0);

        for direction in MoveDirection::ALL {
            via_commands.execute(CameraCommand::Move { direction, dt: 0.1 });
        }
        direct.move_forward(0.1);
        direct.move_backward(0.1);
        direct.move_left(0.1);
        direct.move_right(0.1);
        direct.move_up(0.1);
        direct.move_down(0.1);

        via_commands.execute(CameraCommand::Zoom { offset: 3.0 });
        direct.zoom(3.0);

        via_commands.execute(CameraCommand::Resize {
            width: 640,
            height: 480,
        });
        direct.resize(640, 480);

        assert_eq!(via_commands, direct);
    }

    #[test]
    fn opposite_moves_cancel() {
        let mut camera = OrientedCamera::new(1.0);
        let start = camera.position();
        camera.execute(CameraCommand::Move {
            direction: MoveDirection::Up,
            dt: 0.5,
        });
        assert!((camera.position() - start).abs_diff_eq(Vec3::Y * 1.25, 1e-6));
        camera.execute(CameraCommand::Move {
            direction: MoveDirection::Down,
            dt: 0.5,
        });
        assert!(camera.position().abs_diff_eq(start, 1e-6));
    }
}
