//! Discrete Fréchet recurrence.

use crate::constraint::BandConstraint;
use crate::matrix::DistanceMatrix;
use crate::point::Point;

/// Fill the discrete Fréchet memo grid bottom-up.
///
/// Cell `(i, j)` holds the smallest leash length that couples `a[..=i]` with
/// `b[..=j]`:
///
/// - `(0, 0)`: `d`
/// - first column: `max(f(i-1, 0), d)`
/// - first row: `max(f(0, j-1), d)`
/// - otherwise: `max(min(f(i-1, j), f(i-1, j-1), f(i, j-1)), d)`
///
/// where `d = dist(a[i], b[j])`. Rows are visited in increasing order and each
/// row left to right, so every predecessor is final before it is read. Cells
/// outside `constraint` stay unevaluated and read as infinity.
pub(crate) fn fill<P: Point>(a: &[P], b: &[P], constraint: BandConstraint) -> DistanceMatrix {
    let m = b.len();
    let mut memo = DistanceMatrix::unevaluated(a.len(), m);

    for (i, p) in a.iter().enumerate() {
        for j in constraint.column_range(i, m) {
            let d = p.distance(&b[j]);
            let leash = match (i, j) {
                (0, 0) => d,
                (_, 0) => memo.settled(i - 1, 0).max(d),
                (0, _) => memo.settled(0, j - 1).max(d),
                _ => memo
                    .settled(i - 1, j)
                    .min(memo.settled(i - 1, j - 1))
                    .min(memo.settled(i, j - 1))
                    .max(d),
            };
            memo.set(i, j, leash);
        }
    }

    memo
}
