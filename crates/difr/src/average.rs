//! Averaged Fréchet recurrence.
//!
//! Blends the Fréchet diagonal step with DTW's accumulated cost, scaling each
//! step's pair distance by a coefficient that depends on the curve lengths so
//! that curves sampled at different densities stay comparable.

use crate::constraint::BandConstraint;
use crate::dtw;
use crate::matrix::DistanceMatrix;
use crate::point::Point;

/// Step coefficients of the averaged recurrence for curves of `alpha_n` and `beta_n` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageCoefficients {
    /// `sqrt(1/alpha_n² + 1/beta_n²)`, applied when both curves advance.
    pub diagonal: f64,
    /// `1/alpha_n`, applied when only the second curve advances.
    pub horizontal: f64,
    /// `1/beta_n`, applied when only the first curve advances.
    pub vertical: f64,
}

impl AverageCoefficients {
    /// Compute the coefficients for curve lengths `alpha_n` and `beta_n`.
    ///
    /// Both lengths must be at least one; a zero length gives infinite coefficients.
    #[must_use]
    pub fn new(alpha_n: usize, beta_n: usize) -> Self {
        let (alpha, beta) = (alpha_n as f64, beta_n as f64);
        // 1/α² rather than (1/α)²: the two round differently.
        Self {
            diagonal: (1.0 / (alpha * alpha) + 1.0 / (beta * beta)).sqrt(),
            horizontal: 1.0 / alpha,
            vertical: 1.0 / beta,
        }
    }
}

/// Fill the averaged memo grid bottom-up.
///
/// Cells in the first row or column are zero. Every other cell takes the
/// cheapest of three candidates, each priced as `value + d * coefficient`:
///
/// 1. the averaged cell `(i-1, j-1)` with [`AverageCoefficients::diagonal`]
/// 2. the DTW cell `(i, j-1)` with [`AverageCoefficients::horizontal`]
/// 3. the DTW cell `(i-1, j)` with [`AverageCoefficients::vertical`]
///
/// Candidate 1 is the starting best; 2 and then 3 replace it only when
/// strictly cheaper. The DTW cells come from a separate grid over the same two
/// curves and are never mixed into the averaged memo.
pub(crate) fn fill<P: Point>(a: &[P], b: &[P], constraint: BandConstraint) -> DistanceMatrix {
    let (n, m) = (a.len(), b.len());
    let mut memo = DistanceMatrix::unevaluated(n, m);
    if n == 0 || m == 0 {
        return memo;
    }

    let coeffs = AverageCoefficients::new(n, m);
    let warp = dtw::fill(a, b, constraint);

    for (i, p) in a.iter().enumerate() {
        for j in constraint.column_range(i, m) {
            if i == 0 || j == 0 {
                memo.set(i, j, 0.0);
                continue;
            }

            let d = p.distance(&b[j]);
            let candidates = [
                (memo.settled(i - 1, j - 1), coeffs.diagonal),
                (warp.settled(i, j - 1), coeffs.horizontal),
                (warp.settled(i - 1, j), coeffs.vertical),
            ];
            let mut best = candidates[0].0 + d * candidates[0].1;
            for &(value, coeff) in &candidates[1..] {
                let priced = value + d * coeff;
                if priced < best {
                    best = priced;
                }
            }
            memo.set(i, j, best);
        }
    }

    memo
}
