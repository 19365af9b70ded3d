use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::look_at;
use crate::options::CameraOptions;

/// Pitch is held strictly inside (-90, 90) so `front` never becomes
/// parallel to the world up vector.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest vertical field of view in degrees.
pub const MIN_FOVY: f32 = 1.0;
/// Widest vertical field of view in degrees.
pub const MAX_FOVY: f32 = 80.0;

/// How forward/backward motion treats the vertical component of `front`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Move along the full 3D view direction; vertical moves allowed.
    #[default]
    Fly,
    /// Move along the view direction flattened onto the ground plane, so
    /// altitude never changes. Vertical moves are ignored.
    Walk,
}

/// Clip-space depth convention of the target graphics API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL: near/far map to [-1, 1].
    #[default]
    NegativeOneToOne,
    /// wgpu / Vulkan / D3D: near/far map to [0, 1].
    ZeroToOne,
}

/// First-person camera oriented by yaw and pitch (no roll).
///
/// `yaw` and `pitch` are the only stored orientation; `front` is
/// re-derived from them every time they change. All angles are degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    world_up: Vec3,

    fovy: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    depth_range: DepthRange,

    move_speed: f32,
    yaw_sensitivity: f32,
    pitch_sensitivity: f32,
    move_policy: MovePolicy,
}

impl Default for OrientedCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OrientedCamera {
    /// Camera with default configuration and the given aspect ratio.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self::from_options(&CameraOptions::default(), aspect)
    }

    /// Camera configured from options.
    ///
    /// Pitch and field of view are clamped into their valid ranges. The
    /// projection parameters are contract-checked in debug builds only.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        debug_assert!(aspect > 0.0, "aspect ratio must be positive");
        debug_assert!(options.znear > 0.0, "near clip must be positive");
        debug_assert!(
            options.zfar > options.znear,
            "far clip must lie beyond near clip"
        );

        let world_up = Vec3::from_array(options.world_up).normalize_or_zero();
        debug_assert!(world_up != Vec3::ZERO, "world up must be non-zero");

        let pitch = options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let camera = Self {
            position: Vec3::from_array(options.position),
            yaw: options.yaw,
            pitch,
            front: front_from_angles(options.yaw, pitch, world_up),
            world_up,
            fovy: options.fovy.clamp(MIN_FOVY, MAX_FOVY),
            aspect,
            znear: options.znear,
            zfar: options.zfar,
            depth_range: options.depth_range,
            move_speed: options.move_speed,
            yaw_sensitivity: options.yaw_sensitivity,
            pitch_sensitivity: options.pitch_sensitivity,
            move_policy: options.move_policy,
        };
        log::debug!(
            "camera at {:?} yaw {} pitch {} fovy {} ({:?})",
            camera.position,
            camera.yaw,
            camera.pitch,
            camera.fovy,
            camera.move_policy
        );
        camera
    }

    // ── Transforms ───────────────────────────────────────────────────────

    /// Perspective projection from the vertical field of view.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        let fovy = self.fovy.to_radians();
        match self.depth_range {
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(fovy, self.aspect, self.znear, self.zfar)
            }
            DepthRange::ZeroToOne => {
                Mat4::perspective_rh(fovy, self.aspect, self.znear, self.zfar)
            }
        }
    }

    /// World-to-camera transform looking from `position` along `front`.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        look_at::look_at_library(self.position, self.front, self.world_up)
    }

    /// Same transform as [`view`](Self::view), composed by hand from the
    /// camera basis instead of through glam's look-at.
    #[must_use]
    pub fn manual_view(&self) -> Mat4 {
        look_at::look_at_manual(self.position, self.front, self.world_up)
    }

    /// `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Turn the camera by raw pointer deltas in pixels.
    ///
    /// Screen Y grows downward while pitch grows upward, so `dy` is
    /// subtracted. Pitch saturates at ±[`PITCH_LIMIT`].
    pub fn adjust_look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.yaw_sensitivity;
        self.pitch = (self.pitch - dy * self.pitch_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch, self.world_up);
    }

    /// Move along the view direction (flattened under [`MovePolicy::Walk`]).
    pub fn move_forward(&mut self, dt: f32) {
        if let Some(dir) = self.travel_direction() {
            self.position += dt * self.move_speed * dir;
        }
    }

    /// Move against the view direction (flattened under [`MovePolicy::Walk`]).
    pub fn move_backward(&mut self, dt: f32) {
        if let Some(dir) = self.travel_direction() {
            self.position -= dt * self.move_speed * dir;
        }
    }

    /// Strafe left along the camera's right axis.
    pub fn move_left(&mut self, dt: f32) {
        self.position -= dt * self.move_speed * self.right();
    }

    /// Strafe right along the camera's right axis.
    pub fn move_right(&mut self, dt: f32) {
        self.position += dt * self.move_speed * self.right();
    }

    /// Rise along world up. No-op for walk cameras.
    pub fn move_up(&mut self, dt: f32) {
        if self.move_policy == MovePolicy::Fly {
            self.position += dt * self.move_speed * self.world_up;
        }
    }

    /// Sink along world up. No-op for walk cameras.
    pub fn move_down(&mut self, dt: f32) {
        if self.move_policy == MovePolicy::Fly {
            self.position -= dt * self.move_speed * self.world_up;
        }
    }

    /// Scroll-wheel zoom. Positive `offset` zooms in (narrows the field of
    /// view); the result saturates at [`MIN_FOVY`]..=[`MAX_FOVY`].
    pub fn zoom(&mut self, offset: f32) {
        self.fovy = (self.fovy - offset).clamp(MIN_FOVY, MAX_FOVY);
    }

    /// Replace the viewport aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        debug_assert!(aspect > 0.0, "aspect ratio must be positive");
        self.aspect = aspect;
    }

    /// Recompute the aspect ratio for a new viewport size. A zero-sized
    /// viewport (minimized window) keeps the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.set_aspect(width as f32 / height as f32);
    }

    /// Teleport the eye without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right axis, `normalize(front × world_up)`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.world_up).normalize()
    }

    /// Fixed world up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees. Not wrapped.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within ±[`PITCH_LIMIT`].
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// Translation speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Fly or walk movement.
    #[must_use]
    pub fn move_policy(&self) -> MovePolicy {
        self.move_policy
    }

    /// Clip-space depth convention used by [`projection`](Self::projection).
    #[must_use]
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Direction used by forward/backward motion, or `None` when a walk
    /// camera has no horizontal component to follow.
    fn travel_direction(&self) -> Option<Vec3> {
        match self.move_policy {
            MovePolicy::Fly => Some(self.front),
            MovePolicy::Walk => {
                let vertical = self.world_up * self.front.dot(self.world_up);
                let flat = (self.front - vertical).normalize_or_zero();
                (flat != Vec3::ZERO).then_some(flat)
            }
        }
    }
}

/// Orthonormal pair spanning the plane perpendicular to `up`, used as the
/// yaw 0° and yaw 90° directions. For `up = +Y` this is `(+X, +Z)`.
fn horizon_axes(up: Vec3) -> (Vec3, Vec3) {
    let reference = if up.x.abs() < 0.9 { Vec3::X } else { Vec3::Z };
    let yaw_zero = (reference - up * reference.dot(up)).normalize();
    (yaw_zero, yaw_zero.cross(up))
}

/// Unit view direction for the given yaw/pitch in degrees. Pitch is
/// measured from the plane perpendicular to `up`, so the pitch clamp keeps
/// `front` off `up` for any up vector.
fn front_from_angles(yaw: f32, pitch: f32, up: Vec3) -> Vec3 {
    let (yaw_zero, yaw_ninety) = horizon_axes(up);
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    (yaw_zero * (cos_yaw * cos_pitch)
        + yaw_ninety * (sin_yaw * cos_pitch)
        + up * sin_pitch)
        .normalize()
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the camera transforms and eye metadata.
///
/// Matrices are column-major, matching `glam` and GLSL/WGSL `mat4`.
pub struct CameraUniform {
    /// World-to-camera transform.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Combined `projection * view`.
    pub view_proj: [[f32; 4]; 4],
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Unit view direction, for specular lighting.
    pub front: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity transforms with the default camera metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 60.0,
            front: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update(&mut self, camera: &OrientedCamera) {
        let view = camera.view();
        let projection = camera.projection();
        self.view = view.to_cols_array_2d();
        self.projection = projection.to_cols_array_2d();
        self.view_proj = (projection * view).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.fovy = camera.fovy;
        self.front = camera.front.to_array();
        self.aspect = camera.aspect;
    }
}
