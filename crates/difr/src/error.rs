//! Error types for building curves from raw coordinates.

/// Errors from constructing the built-in point types.
///
/// The distance recurrences themselves never fail: empty curves yield zero and
/// metric output is trusted as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Returned when a single point has a NaN or infinite coordinate.
    #[error("point has non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate {
        /// Axis of the first non-finite coordinate.
        axis: usize,
    },

    /// Returned when a point inside a curve has a NaN or infinite coordinate.
    #[error("curve point {index} has non-finite coordinate on axis {axis}")]
    NonFinitePoint {
        /// Position of the offending point in the curve.
        index: usize,
        /// Axis of the first non-finite coordinate.
        axis: usize,
    },
}
