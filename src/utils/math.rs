use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::utils::VECTOR_EPSILON;

/// Body-frame forward axis (+Z).
pub const BODY_FORWARD: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);
/// Body-frame up axis (+Y).
pub const BODY_UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
/// Body-frame right axis (+X).
pub const BODY_RIGHT: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Normalizes `v`, substituting `fallback` when the vector is too short to
/// carry a direction.
pub fn normalize_or(v: &Vector3<f64>, fallback: Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > VECTOR_EPSILON {
        v / norm
    } else {
        fallback
    }
}

/// Orientation with the nose pointing along `heading` (radians, from +Z toward +X)
/// and wings level.
pub fn heading_to_orientation(heading: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading)
}

/// Pitch, roll and heading (radians) of a body-to-world orientation.
///
/// Pitch is positive nose up, roll positive right wing down, heading measured
/// from +Z toward +X in `[0, 2π)`.
pub fn attitude_angles(orientation: &UnitQuaternion<f64>) -> (f64, f64, f64) {
    let forward = orientation * BODY_FORWARD;
    let right = orientation * BODY_RIGHT;

    let pitch = forward.y.clamp(-1.0, 1.0).asin();
    let roll = (-right.y).clamp(-1.0, 1.0).asin();
    let mut heading = forward.x.atan2(forward.z);
    if heading < 0.0 {
        heading += 2.0 * PI;
    }

    (pitch, roll, heading)
}

/// Returns true when every component of the vector is finite.
#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
