//! Public entry points for the four curve distances.

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::average;
use crate::constraint::BandConstraint;
use crate::dtw;
use crate::frechet;
use crate::pairwise::{Measure, PairwiseDistances};
use crate::path::Coupling;
use crate::point::Point;
use crate::weighted::{self, Weighted};

/// Immutable curve-distance configuration. Thread-safe and copyable.
///
/// Every call allocates its own memo grids and drops them before returning,
/// so one value can serve any number of calls, from any number of threads.
/// If either curve is empty every measure is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frechet {
    constraint: BandConstraint,
}

impl Frechet {
    /// Create a calculator that evaluates every cell.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self {
            constraint: BandConstraint::Unconstrained,
        }
    }

    /// Create a calculator restricted to a Sakoe-Chiba band of `radius`.
    ///
    /// When the curve lengths differ by more than `radius` no coupling fits in
    /// the band and every measure is infinite.
    #[must_use]
    pub fn with_sakoe_chiba(radius: usize) -> Self {
        Self {
            constraint: BandConstraint::SakoeChibaRadius(radius),
        }
    }

    /// Create a calculator from an existing [`BandConstraint`].
    #[must_use]
    pub fn from_constraint(constraint: BandConstraint) -> Self {
        Self { constraint }
    }

    /// Return the band constraint configuration.
    #[must_use]
    pub fn constraint(&self) -> BandConstraint {
        self.constraint
    }

    /// Compute the discrete Fréchet distance between two curves.
    ///
    /// Runs in O(n * m) time and space, evaluating the recurrence bottom-up.
    #[must_use]
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance<P: Point>(&self, a: &[P], b: &[P]) -> f64 {
        if a.is_empty() || b.is_empty() {
            trace!("empty curve, distance is zero");
            return 0.0;
        }
        if !self.reaches_end(a.len(), b.len()) {
            return f64::INFINITY;
        }
        let dist = frechet::fill(a, b, self.constraint)
            .terminal()
            .unwrap_or(0.0);
        debug!(dist, "discrete Fréchet distance computed");
        dist
    }

    /// Compute the discrete Fréchet distance and the summed pair distances of the
    /// optimal coupling that achieves it.
    ///
    /// When several couplings reach the same distance the one reported is fixed
    /// by preferring the diagonal, then the left, then the upper neighbour.
    #[must_use]
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance_with_weight<P: Point>(&self, a: &[P], b: &[P]) -> Weighted {
        if a.is_empty() || b.is_empty() {
            trace!("empty curve, distance and weight are zero");
            return Weighted::ZERO;
        }
        if !self.reaches_end(a.len(), b.len()) {
            return Weighted::UNREACHABLE;
        }
        let result = weighted::fill(a, b, self.constraint)
            .terminal()
            .unwrap_or(Weighted::ZERO);
        debug!(
            dist = result.distance,
            weight = result.weight,
            "weighted Fréchet distance computed"
        );
        result
    }

    /// Like [`distance_with_weight`][Self::distance_with_weight], also returning
    /// the coupling whose pair distances sum to the weight.
    #[must_use]
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance_and_coupling<P: Point>(&self, a: &[P], b: &[P]) -> (Weighted, Coupling) {
        if a.is_empty() || b.is_empty() {
            trace!("empty curve, coupling is empty");
            return (Weighted::ZERO, Coupling::default());
        }
        if !self.reaches_end(a.len(), b.len()) {
            return (Weighted::UNREACHABLE, Coupling::default());
        }
        let grids = weighted::fill(a, b, self.constraint);
        let result = grids.terminal().unwrap_or(Weighted::ZERO);
        let coupling = grids.coupling();
        debug!(
            dist = result.distance,
            weight = result.weight,
            steps = coupling.len(),
            "weighted Fréchet coupling computed"
        );
        (result, coupling)
    }

    /// Compute the averaged Fréchet distance between two curves.
    ///
    /// Step costs are scaled by [`AverageCoefficients`][crate::AverageCoefficients]
    /// for the two curve lengths. Allocates an averaged grid and an independent
    /// DTW grid, both O(n * m).
    #[must_use]
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn average_distance<P: Point>(&self, a: &[P], b: &[P]) -> f64 {
        if a.is_empty() || b.is_empty() {
            trace!("empty curve, averaged distance is zero");
            return 0.0;
        }
        if !self.reaches_end(a.len(), b.len()) {
            return f64::INFINITY;
        }
        let dist = average::fill(a, b, self.constraint)
            .terminal()
            .unwrap_or(0.0);
        debug!(dist, "averaged Fréchet distance computed");
        dist
    }

    /// Compute the dynamic time warping cost between two curves.
    ///
    /// Returns the raw sum of pair distances along the cheapest coupling.
    #[must_use]
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn dynamic_time_warping<P: Point>(&self, a: &[P], b: &[P]) -> f64 {
        if a.is_empty() || b.is_empty() {
            trace!("empty curve, DTW cost is zero");
            return 0.0;
        }
        if !self.reaches_end(a.len(), b.len()) {
            return f64::INFINITY;
        }
        let cost = dtw::fill(a, b, self.constraint).terminal().unwrap_or(0.0);
        debug!(cost, "DTW cost computed");
        cost
    }

    /// False when the band excludes the last cell of an `n × m` grid, so no
    /// coupling can finish and the grids need not be filled.
    fn reaches_end(&self, n: usize, m: usize) -> bool {
        let reachable = self.constraint.contains(n - 1, m - 1);
        if !reachable {
            debug!(
                constraint = ?self.constraint,
                "last cell outside the band, measure is infinite"
            );
        }
        reachable
    }

    /// Compute one measure between one pair of curves.
    #[must_use]
    pub fn measure<P: Point>(&self, measure: Measure, a: &[P], b: &[P]) -> f64 {
        match measure {
            Measure::Frechet => self.distance(a, b),
            Measure::DynamicTimeWarping => self.dynamic_time_warping(a, b),
            Measure::Average => self.average_distance(a, b),
        }
    }

    /// Compute `measure` for every unordered pair of `curves`.
    ///
    /// Only the lower triangle is evaluated, so the result assumes the measure
    /// is symmetric, which holds whenever the point metric is. Pairs are
    /// evaluated in parallel using rayon.
    #[must_use]
    #[instrument(skip(self, curves), fields(n = curves.len()))]
    pub fn pairwise<C, P>(&self, curves: &[C], measure: Measure) -> PairwiseDistances
    where
        C: AsRef<[P]> + Sync,
        P: Point + Sync,
    {
        let n = curves.len();
        let total_pairs = n * n.saturating_sub(1) / 2;

        let distances: Vec<f64> = (0..total_pairs)
            .into_par_iter()
            .map(|flat_idx| {
                let (i, j) = PairwiseDistances::unflatten(flat_idx);
                self.measure(measure, curves[i].as_ref(), curves[j].as_ref())
            })
            .collect();

        debug!(pairs = total_pairs, ?measure, "pairwise distances computed");
        PairwiseDistances::from_raw(n, distances)
    }
}
