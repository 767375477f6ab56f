//! Geometry value types for engine crates: vectors, axis-aligned boxes and
//! rays, plus the tolerance helpers they share.
//!
//! Everything here is a plain `Copy` value. Operations read their inputs and
//! return fresh values (or write through `&mut self`); there is no shared
//! scratch state, so every call is reentrant and thread safe.
#![forbid(unsafe_code)]

mod bounds3;
mod error;
pub mod math;
mod ray;
mod vector3;

pub use bounds3::Bounds3;
pub use error::GeomError;
pub use ray::Ray;
pub use vector3::Vector3;
