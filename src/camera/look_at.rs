//! Look-at view transforms.
//!
//! Two constructions of the same right-handed world-to-camera matrix: one
//! through glam, one composed by hand from the camera basis. Neither
//! assumes `up` is perpendicular to `front`; the camera up axis is
//! re-derived with a double cross product.
//!
//! `front` must not be parallel to `up`. The camera's pitch clamp
//! guarantees this for its own basis.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Look-at through [`Mat4::look_at_rh`].
#[must_use]
pub fn look_at_library(eye: Vec3, front: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, eye + front, up)
}

/// Look-at composed as `rotation * translation(-eye)`, where the rotation
/// rows are the camera's right, up and backward axes.
#[must_use]
pub fn look_at_manual(eye: Vec3, front: Vec3, up: Vec3) -> Mat4 {
    let forward = front.normalize();
    let right = forward.cross(up).normalize();
    let cam_up = right.cross(forward).normalize();

    // Columns are given here, so each row of the rotation reads downward.
    let rotation = Mat4::from_cols(
        Vec4::new(right.x, cam_up.x, -forward.x, 0.0),
        Vec4::new(right.y, cam_up.y, -forward.y, 0.0),
        Vec4::new(right.z, cam_up.z, -forward.z, 0.0),
        Vec4::W,
    );
    rotation * Mat4::from_translation(-eye)
}

/// Whether the upper-left 3×3 block of `m` is orthonormal within `eps`.
#[must_use]
pub fn is_orthonormal(m: &Mat4, eps: f32) -> bool {
    let basis = Mat3::from_mat4(*m);
    let cols = [basis.x_axis, basis.y_axis, basis.z_axis];
    let unit = cols.iter().all(|c| (c.length() - 1.0).abs() <= eps);
    let perpendicular = cols[0].dot(cols[1]).abs() <= eps
        && cols[1].dot(cols[2]).abs() <= eps
        && cols[0].dot(cols[2]).abs() <= eps;
    unit && perpendicular
}
