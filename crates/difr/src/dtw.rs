//! Dynamic time warping recurrence.

use crate::constraint::BandConstraint;
use crate::matrix::DistanceMatrix;
use crate::point::Point;

/// Fill the DTW cost grid bottom-up.
///
/// Cell `(i, j)` holds the smallest total pairwise cost of a coupling of
/// `a[..=i]` with `b[..=j]`. Costs accumulate additively:
///
/// - `(0, 0)`: `d`
/// - first column: `dtw(i-1, 0) + d`
/// - first row: `dtw(0, j-1) + d`
/// - otherwise: `min(dtw(i-1, j-1), dtw(i, j-1), dtw(i-1, j)) + d`
///
/// The raw accumulated cost is kept; no square root is taken.
pub(crate) fn fill<P: Point>(a: &[P], b: &[P], constraint: BandConstraint) -> DistanceMatrix {
    let m = b.len();
    let mut cost = DistanceMatrix::unevaluated(a.len(), m);

    for (i, p) in a.iter().enumerate() {
        for j in constraint.column_range(i, m) {
            let d = p.distance(&b[j]);
            let prior = match (i, j) {
                (0, 0) => 0.0,
                (_, 0) => cost.settled(i - 1, 0),
                (0, _) => cost.settled(0, j - 1),
                _ => cost
                    .settled(i - 1, j - 1)
                    .min(cost.settled(i, j - 1))
                    .min(cost.settled(i - 1, j)),
            };
            cost.set(i, j, prior + d);
        }
    }

    cost
}
