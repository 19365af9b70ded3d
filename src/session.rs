//! One camera, its input processor and its frame clock, stepped together
//! once per frame.

use glam::{Mat4, Vec3};

use crate::camera::{CameraUniform, OrientedCamera};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::util::FrameClock;

/// Transforms the render loop reads each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
    /// `projection * view`.
    pub view_projection: Mat4,
    /// Eye position in world space.
    pub position: Vec3,
}

/// Drives an [`OrientedCamera`] from raw input events.
///
/// Feed events as they arrive with [`handle_event`](Self::handle_event),
/// then call [`frame`](Self::frame) (or [`advance`](Self::advance) with an
/// explicit frame time) once per rendered frame.
#[derive(Debug, Clone)]
pub struct FlySession {
    camera: OrientedCamera,
    input: InputProcessor,
    clock: FrameClock,
}

impl FlySession {
    /// Build a session from options for a viewport of the given aspect.
    #[must_use]
    pub fn new(options: &Options, aspect: f32) -> Self {
        log::debug!("starting fly session (aspect {aspect})");
        Self {
            camera: OrientedCamera::from_options(&options.camera, aspect),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            clock: FrameClock::new(),
        }
    }

    /// The driven camera.
    #[must_use]
    pub fn camera(&self) -> &OrientedCamera {
        &self.camera
    }

    /// Mutable camera access for programmatic placement.
    pub fn camera_mut(&mut self) -> &mut OrientedCamera {
        &mut self.camera
    }

    /// The input processor and its state.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Whether a quit key has been pressed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.input.quit_requested()
    }

    /// Apply one input event. Look, zoom and resize take effect
    /// immediately; movement keys take effect on the next frame.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.camera.execute(command);
        }
    }

    /// Step one frame measured by the session clock.
    pub fn frame(&mut self) -> FrameMatrices {
        let dt = self.clock.tick();
        self.advance(dt)
    }

    /// Step one frame of `dt` seconds: apply held-key movement and return
    /// the resulting transforms.
    pub fn advance(&mut self, dt: f32) -> FrameMatrices {
        for command in self.input.movement_commands(dt) {
            self.camera.execute(command);
        }
        self.matrices()
    }

    /// Current transforms without stepping.
    #[must_use]
    pub fn matrices(&self) -> FrameMatrices {
        let view = self.camera.view();
        let projection = self.camera.projection();
        FrameMatrices {
            view,
            projection,
            view_projection: projection * view,
            position: self.camera.position(),
        }
    }

    /// Current camera state packed for GPU upload.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.camera);
        uniform
    }

    /// Smoothed frame rate measured by [`frame`](Self::frame).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MovePolicy;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    #[test]
    fn held_key_moves_every_frame_until_released() {
        let mut session = FlySession::new(&Options::default(), 1.0);
        session.handle_event(&key("KeyW", true));
        let _ = session.advance(0.5);
        let _ = session.advance(0.5);
        assert!(session
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));

        session.handle_event(&key("KeyW", false));
        let m = session.advance(10.0);
        assert!(m.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn matrices_match_camera() {
        let mut session = FlySession::new(&Options::default(), 4.0 / 3.0);
        session.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        session.handle_event(&InputEvent::CursorMoved { x: 60.0, y: -30.0 });
        let m = session.advance(0.0);
        assert_eq!(m.view, session.camera().view());
        assert_eq!(m.projection, session.camera().projection());
        assert_eq!(m.view_projection, session.camera().view_projection());
        assert_eq!(session.uniform().view, m.view.to_cols_array_2d());
    }

    #[test]
    fn walk_session_ignores_vertical_keys() {
        let mut options = Options::default();
        options.camera.move_policy = MovePolicy::Walk;
        let mut session = FlySession::new(&options, 1.0);
        session.handle_event(&key("Space", true));
        let m = session.advance(1.0);
        assert_eq!(m.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn clock_driven_frames_step_the_camera() {
        let mut session = FlySession::new(&Options::default(), 1.0);
        session.handle_event(&key("KeyS", true));
        std::thread::sleep(std::time::Duration::from_millis(5));
        let first = session.frame();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = session.frame();

        // Backing away from the default -Z view raises z every frame.
        assert!(first.position.z > 3.0);
        assert!(second.position.z > first.position.z);
        assert_eq!(second, session.matrices());
        assert!(session.fps().is_finite());
        assert!(session.fps() > 0.0);
    }

    #[test]
    fn resize_event_updates_projection() {
        let mut session = FlySession::new(&Options::default(), 1.0);
        session.handle_event(&InputEvent::Resized {
            width: 1600,
            height: 800,
        });
        assert_eq!(session.camera().aspect(), 2.0);
    }
}
