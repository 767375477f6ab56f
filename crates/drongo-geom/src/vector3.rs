use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::math;

/// Three-component `f32` vector used for both points and directions.
///
/// Equality is tolerance based: two vectors compare equal when every
/// component differs by at most [`math::ZERO_TOLERANCE`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vector3 = Vector3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const UNIT_X: Vector3 = Vector3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UNIT_Y: Vector3 = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const UNIT_Z: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };
    pub const UP: Vector3 = Vector3::UNIT_Y;

    /// Creates a vector. Non-finite components (NaN, infinities) become `0.0`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            z: finite_or_zero(z),
        }
    }

    #[inline]
    pub fn set_value(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component by axis index: 0 = x, 1 = y, 2 = z.
    ///
    /// # Panics
    /// If `axis > 2`.
    #[inline]
    pub fn component(self, axis: usize) -> f32 {
        self[axis]
    }

    #[inline]
    pub fn min_component(self) -> f32 {
        self.x.min(self.y.min(self.z))
    }

    #[inline]
    pub fn max_component(self) -> f32 {
        self.x.max(self.y.max(self.z))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
            z: self.z.min(rhs.z),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
            z: self.z.max(rhs.z),
        }
    }

    /// Squared length in `f32`. Overflows to infinity once a component
    /// passes roughly `1.8e19`; use [`Vector3::length`] for such vectors.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length, accumulated in `f64` so neither huge nor tiny
    /// finite components overflow or underflow.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_f64() as f32
    }

    #[inline]
    fn length_f64(self) -> f64 {
        let (x, y, z) = (f64::from(self.x), f64::from(self.y), f64::from(self.z));
        (x * x + y * y + z * z).sqrt()
    }

    #[inline]
    pub fn distance_squared(self, rhs: Vector3) -> f32 {
        (rhs - self).length_squared()
    }

    #[inline]
    pub fn distance(self, rhs: Vector3) -> f32 {
        (rhs - self).length()
    }

    /// Unit vector in the same direction. Only the exact zero vector is
    /// returned as is.
    #[inline]
    pub fn normalize(self) -> Vector3 {
        let len = self.length_f64();
        if len > 0.0 {
            Vector3 {
                x: (f64::from(self.x) / len) as f32,
                y: (f64::from(self.y) / len) as f32,
                z: (f64::from(self.z) / len) as f32,
            }
        } else {
            self
        }
    }

    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    #[inline]
    pub fn negate_mut(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    #[inline]
    pub fn scale(self, k: f32) -> Vector3 {
        self * k
    }

    #[inline]
    pub fn scale_mut(&mut self, k: f32) -> &mut Self {
        *self *= k;
        self
    }

    /// `self + b * k`.
    #[inline]
    pub fn add_scaled(self, b: Vector3, k: f32) -> Vector3 {
        Vector3 {
            x: self.x + b.x * k,
            y: self.y + b.y * k,
            z: self.z + b.z * k,
        }
    }

    #[inline]
    pub fn dot(self, rhs: Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn abs_dot(self, rhs: Vector3) -> f32 {
        self.dot(rhs).abs()
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Angle in radians between two vectors of any length.
    #[inline]
    pub fn angle(self, rhs: Vector3) -> f32 {
        (self.dot(rhs) / (self.length() * rhs.length())).acos()
    }

    /// Angle in radians between two unit vectors. Inputs that are not unit
    /// length give meaningless results.
    #[inline]
    pub fn angle_fast(self, rhs: Vector3) -> f32 {
        self.dot(rhs).acos()
    }

    /// Signed length of the projection of `self` onto `onto`.
    pub fn try_projection(self, onto: Vector3) -> Result<f32, GeomError> {
        let len = onto.length();
        if math::equals(len, 0.0) {
            return Err(GeomError::ZeroLengthProjection);
        }
        Ok(self.dot(onto) / len)
    }

    /// Like [`Vector3::try_projection`], but logs the failure and returns `0.0`.
    pub fn projection(self, onto: Vector3) -> f32 {
        match self.try_projection(onto) {
            Ok(len) => len,
            Err(err) => {
                log::error!("projection of {} onto {}: {}", self, onto, err);
                0.0
            }
        }
    }

    /// Flips `self` into the hemisphere of `v`.
    #[inline]
    pub fn faceforward(self, v: Vector3) -> Vector3 {
        if self.dot(v) < 0.0 { -self } else { self }
    }

    /// `(1 - t) * start + t * end`, unclamped.
    #[inline]
    pub fn lerp(t: f32, start: Vector3, end: Vector3) -> Vector3 {
        start * (1.0 - t) + end * t
    }

    /// Completes `self` (which must be unit length) into a right-handed
    /// orthonormal basis `(self, v2, v3)`.
    #[inline]
    pub fn coordinate_system(self) -> (Vector3, Vector3) {
        math::coordinate_system(self)
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        math::equals(self.x, other.x)
            && math::equals(self.y, other.y)
            && math::equals(self.z, other.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{} y:{} z:{}", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Vector3::new(value[0], value[1], value[2])
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("axis {axis} out of range for Vector3"),
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f32) -> Vector3 {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Tolerance equality is reflexive for anything `new` lets through.
        #[test]
        fn new_is_finite_and_self_equal(v in any::<Vector3>()) {
            let w = Vector3::new(v.x, v.y, v.z);
            prop_assert!(w.x.is_finite() && w.y.is_finite() && w.z.is_finite());
            prop_assert_eq!(w, w);
        }
    }

    #[test]
    fn new_coerces_non_finite() {
        let v = Vector3::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        let w = Vector3::new(f32::MAX, -f32::MAX, 1.5);
        assert_eq!(w.to_array(), [f32::MAX, -f32::MAX, 1.5]);
    }

    #[test]
    fn indexing_matches_fields() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v.component(1), 2.0);
        assert_eq!(v[2], 3.0);
    }
}
