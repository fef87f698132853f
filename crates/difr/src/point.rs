//! The point capability consumed by the recurrences, plus two built-in points.

use std::ops::Index;

use crate::error::CurveError;

/// Anything that can report its distance to another value of the same type.
///
/// The recurrences assume the result is finite and non-negative. Symmetry and
/// the triangle inequality are the implementor's business; nothing checks them.
pub trait Point {
    /// Distance from `self` to `other`.
    fn distance(&self, other: &Self) -> f64;
}

/// Scalar samples compare by absolute difference.
impl Point for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

/// A point in `D`-dimensional space under the L2 metric. Coordinates are always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Euclidean<const D: usize>([f64; D]);

impl<const D: usize> Euclidean<D> {
    /// Create a point, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CurveError::NonFiniteCoordinate`] | Any coordinate is NaN or infinite |
    pub fn new(coords: [f64; D]) -> Result<Self, CurveError> {
        if let Some(axis) = coords.iter().position(|c| !c.is_finite()) {
            return Err(CurveError::NonFiniteCoordinate { axis });
        }
        Ok(Self(coords))
    }

    /// Return the coordinates.
    #[must_use]
    pub fn coords(&self) -> &[f64; D] {
        &self.0
    }
}

impl<const D: usize> Point for Euclidean<D> {
    fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl<const D: usize> Index<usize> for Euclidean<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.0[axis]
    }
}

impl<const D: usize> TryFrom<[f64; D]> for Euclidean<D> {
    type Error = CurveError;

    fn try_from(coords: [f64; D]) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

/// Build a Euclidean curve from raw coordinates, preserving order.
///
/// An empty slice yields an empty curve.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`CurveError::NonFinitePoint`] | Any coordinate of any point is NaN or infinite |
pub fn euclidean_curve<const D: usize>(
    coords: &[[f64; D]],
) -> Result<Vec<Euclidean<D>>, CurveError> {
    coords
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            Euclidean::new(c).map_err(|err| match err {
                CurveError::NonFiniteCoordinate { axis } => {
                    CurveError::NonFinitePoint { index, axis }
                }
                other => other,
            })
        })
        .collect()
}
