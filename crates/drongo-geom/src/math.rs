//! Shared scalar helpers: tolerance comparison, angle conversion, and the
//! orthonormal basis builder.

use core::f32::consts::PI;

use crate::Vector3;

/// Absolute differences at or below this value compare as equal.
pub const ZERO_TOLERANCE: f32 = 1e-6;

/// Multiply degrees by this to get radians.
pub const DEG2RAD: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD2DEG: f32 = 180.0 / PI;

/// Tolerance comparison used for every geometric equality in the crate.
#[inline]
pub fn equals(a: f32, b: f32) -> bool {
    (a - b).abs() <= ZERO_TOLERANCE
}

/// `(v & (v - 1)) == 0`.
///
/// Only meaningful for positive inputs: `0` reports `true` and negative
/// values give arbitrary answers.
#[inline]
pub fn is_power_of_two(v: i32) -> bool {
    (v & v.wrapping_sub(1)) == 0
}

/// `(1 - t) * a + t * b`. `t` is not clamped, values outside `[0, 1]`
/// extrapolate.
#[inline]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Builds `v2` and `v3` so that `(v1, v2, v3)` is a right-handed orthonormal
/// basis.
///
/// `v1` must already be unit length. The larger of `|x|` and `|y|` picks the
/// plane `v2` is built in, which keeps the normalizing divisor away from zero.
pub fn coordinate_system(v1: Vector3) -> (Vector3, Vector3) {
    let v2 = if v1.x.abs() > v1.y.abs() {
        let inv_len = 1.0 / (v1.x * v1.x + v1.z * v1.z).sqrt();
        Vector3::new(-v1.z * inv_len, 0.0, v1.x * inv_len)
    } else {
        let inv_len = 1.0 / (v1.y * v1.y + v1.z * v1.z).sqrt();
        Vector3::new(0.0, v1.z * inv_len, -v1.y * inv_len)
    };
    let v3 = v1.cross(v2);
    (v2, v3)
}
