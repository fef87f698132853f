//! Type-erased points for callers that want one curve type across point kinds.

use std::any::Any;
use std::fmt;

use crate::point::Point;

/// Object-safe face of [`Point`] used behind [`AnyPoint`].
trait ErasedPoint: Send + Sync {
    fn erased_distance(&self, other: &dyn ErasedPoint) -> f64;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Point + Send + Sync + 'static> ErasedPoint for T {
    fn erased_distance(&self, other: &dyn ErasedPoint) -> f64 {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self.distance(other),
            None => f64::INFINITY,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A point whose concrete type has been erased.
///
/// Two `AnyPoint`s wrapping the same concrete type measure with that type's
/// metric. Points of different concrete types are infinitely far apart.
pub struct AnyPoint(Box<dyn ErasedPoint>);

impl AnyPoint {
    /// Wrap a concrete point.
    pub fn new<T: Point + Send + Sync + 'static>(point: T) -> Self {
        Self(Box::new(point))
    }

    /// Borrow the wrapped point if it has concrete type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Point for AnyPoint {
    fn distance(&self, other: &Self) -> f64 {
        self.0.erased_distance(other.0.as_ref())
    }
}

impl fmt::Debug for AnyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyPoint").finish_non_exhaustive()
    }
}

/// Convert a homogeneous list of points into erased points, preserving order and length.
#[must_use]
pub fn erase<T: Point + Send + Sync + 'static>(points: Vec<T>) -> Vec<AnyPoint> {
    points.into_iter().map(AnyPoint::new).collect()
}
