//! Error types for region construction.

use thiserror::Error;

/// Errors returned by [`Region::try_new`](crate::Region::try_new).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// A half-extent is below zero.
    #[error("negative half-extent ({half_x}, {half_y})")]
    NegativeHalfExtent {
        /// Half-width supplied by the caller.
        half_x: f64,
        /// Half-height supplied by the caller.
        half_y: f64,
    },

    /// A center or half-extent coordinate is NaN or infinite.
    #[error("non-finite region coordinate")]
    NonFiniteCoordinate,
}
