use thiserror::Error;

/// Failures surfaced by the geometry kernel.
///
/// Most degenerate inputs are absorbed (a zero vector normalizes to itself,
/// flat box axes are skipped by `offset`); only operations with no sensible
/// fallback report an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("corner index {index} out of range, expected 0..8")]
    CornerOutOfRange { index: usize },
    #[error("cannot project onto a zero-length vector")]
    ZeroLengthProjection,
}
