//! Transform matrix construction.
//!
//! Stateless builders for the 4x4 matrices used throughout the engine. All
//! matrices are column-major [`cgmath::Matrix4<f32>`] and are meant to be
//! applied to column vectors on the right (`m * v`), so a composition `a * b`
//! applies `b` first.
//!
//! None of these functions validate their input. Zero-length axes, a zero
//! aspect ratio or `near_z == far_z` produce NaN/Inf entries silently; keeping
//! that check out of the per-frame path is the caller's job.

use cgmath::{InnerSpace, Matrix4, Vector3, Vector4};

pub fn identity() -> Matrix4<f32> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Offsets a point's xyz by `(tx, ty, tz)`. The offset lives in the fourth column.
pub fn translation(tx: f32, ty: f32, tz: f32) -> Matrix4<f32> {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        tx, ty, tz, 1.0,
    )
}

pub fn scaling(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
    Matrix4::new(
        sx, 0.0, 0.0, 0.0, //
        0.0, sy, 0.0, 0.0, //
        0.0, 0.0, sz, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn uniform_scaling(s: f32) -> Matrix4<f32> {
    scaling(s, s, s)
}

/// Rotation of `radians` about an arbitrary axis (Rodrigues' formula).
///
/// The axis is normalized here, so callers may pass any non-zero length.
/// A zero-length axis yields a NaN matrix.
pub fn rotation(radians: f32, axis: Vector3<f32>) -> Matrix4<f32> {
    let axis = axis.normalize();
    let ct = radians.cos();
    let st = radians.sin();
    let ci = 1.0 - ct;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        ct + x * x * ci,
        y * x * ci + z * st,
        z * x * ci - y * st,
        0.0,
        x * y * ci - z * st,
        ct + y * y * ci,
        z * y * ci + x * st,
        0.0,
        x * z * ci + y * st,
        y * z * ci - x * st,
        ct + z * z * ci,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

pub fn rotation_around_x(radians: f32) -> Matrix4<f32> {
    let ct = radians.cos();
    let st = radians.sin();

    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, ct, st, 0.0, //
        0.0, -st, ct, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn rotation_around_y(radians: f32) -> Matrix4<f32> {
    let ct = radians.cos();
    let st = radians.sin();

    Matrix4::new(
        ct, 0.0, -st, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        st, 0.0, ct, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn rotation_around_z(radians: f32) -> Matrix4<f32> {
    let ct = radians.cos();
    let st = radians.sin();

    Matrix4::new(
        ct, st, 0.0, 0.0, //
        -st, ct, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/**
 * Right-handed perspective projection.
 *
 * View space looks down -Z. A point at `z = -near_z` lands on clip depth 0 and
 * one at `z = -far_z` on depth 1 after the divide by `w = -z_view`.
 *
 * Callers must keep `0 < near_z < far_z`, `aspect > 0` and
 * `0 < fovy_radians < PI`; nothing is checked here.
 */
pub fn perspective_right_hand(
    fovy_radians: f32,
    aspect: f32,
    near_z: f32,
    far_z: f32,
) -> Matrix4<f32> {
    let ys = 1.0 / (fovy_radians * 0.5).tan();
    let xs = ys / aspect;
    let zs = far_z / (near_z - far_z);

    Matrix4::new(
        xs, 0.0, 0.0, 0.0, //
        0.0, ys, 0.0, 0.0, //
        0.0, 0.0, zs, -1.0, //
        0.0, 0.0, near_z * zs, 0.0,
    )
}

pub fn scalar_multiply(vec: Vector4<f32>, scalar: f32) -> Vector4<f32> {
    Vector4::new(
        vec.x * scalar,
        vec.y * scalar,
        vec.z * scalar,
        vec.w * scalar,
    )
}
