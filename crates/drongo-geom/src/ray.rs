use serde::{Deserialize, Serialize};

use crate::Vector3;

/// Parametric ray `o + d * t`.
///
/// `max` bounds the valid range to `[0, max)` and `time` tags the ray for
/// motion-aware queries. Both are carried for the intersection code that
/// consumes rays; nothing here enforces them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub o: Vector3,
    pub d: Vector3,
    #[serde(default)]
    pub time: f32,
    #[serde(default)]
    pub max: Option<f32>,
}

impl Ray {
    #[inline]
    pub fn new(o: Vector3, d: Vector3) -> Self {
        Self {
            o,
            d,
            time: 0.0,
            max: None,
        }
    }

    #[inline]
    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    #[inline]
    pub fn with_max(mut self, max: f32) -> Self {
        self.max = Some(max);
        self
    }

    /// `o + d * t`. `t` is not checked against `max`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.o.add_scaled(self.d, t)
    }
}
