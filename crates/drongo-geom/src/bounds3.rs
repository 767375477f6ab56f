use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Vector3;
use crate::error::GeomError;
use crate::math;

/// Axis-aligned bounding box.
///
/// A valid box has `min <= max` on every axis. [`Bounds3::EMPTY`] holds the
/// opposite extremes instead, so it absorbs into whatever it is unioned with.
/// `intersect` and a negative `expand` can produce an inverted box; check
/// [`Bounds3::is_empty`] or [`Bounds3::overlaps`] when that matters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: Vector3,
    pub max: Vector3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds3 {
    /// Identity element of [`Bounds3::union`] and [`Bounds3::union_point`].
    pub const EMPTY: Bounds3 = Bounds3 {
        min: Vector3 {
            x: f32::MAX,
            y: f32::MAX,
            z: f32::MAX,
        },
        max: Vector3 {
            x: -f32::MAX,
            y: -f32::MAX,
            z: -f32::MAX,
        },
    };

    /// Box spanning the per-axis min/max of `a` and `b`.
    #[inline]
    pub fn new(a: Vector3, b: Vector3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Zero-volume box at `p`.
    #[inline]
    pub const fn from_point(p: Vector3) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn set_value(&mut self, a: Vector3, b: Vector3) {
        *self = Self::new(a, b);
    }

    /// True when any axis has `min > max`: the empty sentinel, a failed
    /// intersection, or an over-shrunk box.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// One of the eight corners. Bit 0 of `c` picks `max.x` over `min.x`,
    /// bit 1 does the same for y, bit 2 for z.
    pub fn corner(&self, c: usize) -> Result<Vector3, GeomError> {
        if c >= 8 {
            return Err(GeomError::CornerOutOfRange { index: c });
        }
        let pick = |bit: usize| if (c & bit) != 0 { self.max } else { self.min };
        Ok(Vector3 {
            x: pick(1).x,
            y: pick(2).y,
            z: pick(4).z,
        })
    }

    /// Inclusive containment on every axis.
    #[inline]
    pub fn inside(&self, p: Vector3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Containment with the max faces excluded, so boxes tiling space never
    /// both claim a shared boundary point.
    #[inline]
    pub fn inside_exclusive(&self, p: Vector3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Moves every face outward by `delta`. Negative values shrink and may
    /// invert the box.
    #[inline]
    pub fn expand(&self, delta: f32) -> Bounds3 {
        let d = Vector3 {
            x: delta,
            y: delta,
            z: delta,
        };
        Bounds3 {
            min: self.min - d,
            max: self.max + d,
        }
    }

    #[inline]
    pub fn expand_mut(&mut self, delta: f32) -> &mut Self {
        *self = self.expand(delta);
        self
    }

    /// `max - min`.
    #[inline]
    pub fn diagonal(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn surface_area(&self) -> f32 {
        let d = self.diagonal();
        2.0 * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    pub fn volume(&self) -> f32 {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Index of the longest axis (0 = x, 1 = y, 2 = z). Ties go to the
    /// earlier axis, so a cube reports x.
    ///
    /// The `>=` comparisons are intentional; strict `>` would hand a cube to z.
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x >= d.y && d.x >= d.z {
            0
        } else if d.y >= d.z {
            1
        } else {
            2
        }
    }

    /// Point at fraction `t` along each axis, interpolated independently.
    pub fn lerp(&self, t: Vector3) -> Vector3 {
        Vector3 {
            x: math::lerp(t.x, self.min.x, self.max.x),
            y: math::lerp(t.y, self.min.y, self.max.y),
            z: math::lerp(t.z, self.min.z, self.max.z),
        }
    }

    /// Center and radius of the circumscribed sphere. The radius is `0.0`
    /// when the midpoint falls outside the box, which only happens for
    /// inverted boxes such as [`Bounds3::EMPTY`].
    pub fn bounding_sphere(&self) -> (Vector3, f32) {
        let center = self.min * 0.5 + self.max * 0.5;
        let radius = if self.inside(center) {
            center.distance(self.max)
        } else {
            0.0
        };
        (center, radius)
    }

    pub fn union_point(&self, p: Vector3) -> Bounds3 {
        Bounds3 {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Per-axis overlap of two boxes. The result is not validated: disjoint
    /// inputs yield an inverted box.
    pub fn intersect(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// True when the closed intervals overlap on all three axes.
    pub fn overlaps(&self, other: &Bounds3) -> bool {
        let x = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y = self.max.y >= other.min.y && self.min.y <= other.max.y;
        let z = self.max.z >= other.min.z && self.min.z <= other.max.z;
        x && y && z
    }

    /// Position of `p` relative to the box, `(0,0,0)` at `min` and `(1,1,1)`
    /// at `max`. Axes with `max <= min` keep the raw offset from `min`.
    pub fn offset(&self, p: Vector3) -> Vector3 {
        let mut o = p - self.min;
        if self.max.x > self.min.x {
            o.x /= self.max.x - self.min.x;
        }
        if self.max.y > self.min.y {
            o.y /= self.max.y - self.min.y;
        }
        if self.max.z > self.min.z {
            o.z /= self.max.z - self.min.z;
        }
        o
    }
}

impl fmt::Display for Bounds3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] - [{}]", self.min, self.max)
    }
}
