//! Error types for shape validation and detection.

use thiserror::Error;

/// Reasons a user-drawn shape is rejected before resolution.
///
/// These never escape the resolver: an invalid shape resolves to an empty
/// country list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius must be positive, got {0} km")]
    NonPositiveRadius(f64),

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("shape has a non-finite coordinate")]
    NonFiniteCoordinate,
}

/// Errors produced by [`crate::pip::CountryDetector`].
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("detection task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
