//! Weighted Fréchet recurrence: the leash length plus the cost of the path that achieves it.

use crate::constraint::BandConstraint;
use crate::matrix::DistanceMatrix;
use crate::path::{Coupling, CouplingStep};
use crate::point::Point;

/// Discrete Fréchet distance together with the summed pair distances of its coupling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted {
    /// Discrete Fréchet distance.
    pub distance: f64,
    /// Sum of paired distances along the selected optimal coupling.
    pub weight: f64,
}

impl Weighted {
    pub(crate) const ZERO: Self = Self {
        distance: 0.0,
        weight: 0.0,
    };

    pub(crate) const UNREACHABLE: Self = Self {
        distance: f64::INFINITY,
        weight: f64::INFINITY,
    };
}

/// Which neighbour a cell extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predecessor {
    Origin,
    Diagonal,
    Left,
    Above,
}

impl Predecessor {
    fn cell(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Self::Origin => (i, j),
            Self::Diagonal => (i - 1, j - 1),
            Self::Left => (i, j - 1),
            Self::Above => (i - 1, j),
        }
    }
}

/// Memo, weight and predecessor grids produced by [`fill`].
pub(crate) struct WeightedGrids {
    memo: DistanceMatrix,
    weight: DistanceMatrix,
    choice: Vec<Predecessor>,
}

impl WeightedGrids {
    /// Distance and weight at the terminal cell, or `None` for an empty grid.
    pub(crate) fn terminal(&self) -> Option<Weighted> {
        Some(Weighted {
            distance: self.memo.terminal()?,
            weight: self.weight.terminal()?,
        })
    }

    /// Walk the predecessor choices back from the terminal cell.
    ///
    /// Empty when the grid is empty or the terminal cell lies outside the band.
    pub(crate) fn coupling(&self) -> Coupling {
        let (rows, cols) = (self.memo.rows(), self.memo.cols());
        if rows == 0 || cols == 0 || !self.memo.is_evaluated(rows - 1, cols - 1) {
            return Coupling::default();
        }

        let mut steps = Vec::with_capacity(rows + cols - 1);
        let (mut i, mut j) = (rows - 1, cols - 1);
        loop {
            steps.push(CouplingStep { a: i, b: j });
            let pred = self.choice[i * cols + j];
            if pred == Predecessor::Origin {
                break;
            }
            (i, j) = pred.cell(i, j);
        }
        steps.reverse();
        Coupling::new(steps)
    }
}

/// Fill the Fréchet memo grid and, alongside it, the path weight of each cell.
///
/// The memo grid follows the plain discrete Fréchet recurrence. Boundary cells
/// have a single predecessor. Interior cells pick the predecessor with the
/// smallest memo value, starting from the diagonal and switching to the left
/// neighbour, then the neighbour above, only on a strictly smaller value. That
/// order decides which of several equally short couplings reports its weight
/// and must not change.
pub(crate) fn fill<P: Point>(a: &[P], b: &[P], constraint: BandConstraint) -> WeightedGrids {
    let (n, m) = (a.len(), b.len());
    let mut memo = DistanceMatrix::unevaluated(n, m);
    let mut weight = DistanceMatrix::unevaluated(n, m);
    let mut choice = vec![Predecessor::Origin; n * m];

    for (i, p) in a.iter().enumerate() {
        for j in constraint.column_range(i, m) {
            let d = p.distance(&b[j]);
            let pred = match (i, j) {
                (0, 0) => Predecessor::Origin,
                (_, 0) => Predecessor::Above,
                (0, _) => Predecessor::Left,
                _ => {
                    let mut best = (Predecessor::Diagonal, memo.settled(i - 1, j - 1));
                    let left = memo.settled(i, j - 1);
                    if left < best.1 {
                        best = (Predecessor::Left, left);
                    }
                    let above = memo.settled(i - 1, j);
                    if above < best.1 {
                        best = (Predecessor::Above, above);
                    }
                    best.0
                }
            };

            let (leash, carried) = match pred {
                Predecessor::Origin => (d, d),
                _ => {
                    let (pi, pj) = pred.cell(i, j);
                    (memo.settled(pi, pj).max(d), weight.settled(pi, pj) + d)
                }
            };
            memo.set(i, j, leash);
            weight.set(i, j, carried);
            choice[i * m + j] = pred;
        }
    }

    WeightedGrids {
        memo,
        weight,
        choice,
    }
}
