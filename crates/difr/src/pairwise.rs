//! Lower-triangular matrix of distances between every pair of curves.

use std::ops::Index;

/// Which curve measure a pairwise computation evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Discrete Fréchet distance.
    Frechet,
    /// Dynamic time warping cost.
    DynamicTimeWarping,
    /// Averaged Fréchet distance.
    Average,
}

/// Distances between every pair of a set of curves.
///
/// Only pairs `(row, col)` with `row > col` are stored, packed row by row; a
/// curve's distance to itself is zero and has no slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseDistances {
    n: usize,
    data: Vec<f64>,
}

/// Slot of the unordered pair `{i, j}`, `i != j`.
fn slot(i: usize, j: usize) -> usize {
    let (row, col) = (i.max(j), i.min(j));
    row * (row - 1) / 2 + col
}

impl PairwiseDistances {
    pub(crate) fn from_raw(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n.saturating_sub(1) / 2);
        Self { n, data }
    }

    /// Map a flat slot back to `(row, col)` with `row > col`.
    pub(crate) fn unflatten(flat_idx: usize) -> (usize, usize) {
        // flat_idx = i*(i-1)/2 + j  →  i = floor((1 + sqrt(1 + 8*flat_idx)) / 2)
        let mut i = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
        // The float estimate can land one row off for huge indices.
        while i * (i - 1) / 2 > flat_idx {
            i -= 1;
        }
        while (i + 1) * i / 2 <= flat_idx {
            i += 1;
        }
        (i, flat_idx - i * (i - 1) / 2)
    }

    /// Number of curves compared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between curves `i` and `j`, in either order; zero when `i == j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`len`][Self::len].
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.n && j < self.n,
            "pair ({i}, {j}) out of range for {} curves",
            self.n
        );
        if i == j { 0.0 } else { self.data[slot(i, j)] }
    }

    /// Every stored pair as `(row, col, distance)` with `row > col`, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data.iter().enumerate().map(|(flat, &value)| {
            let (row, col) = Self::unflatten(flat);
            (row, col, value)
        })
    }

    /// Distances from curve `i` to every curve, itself included.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }

    /// Index of the curve closest to curve `i`, ties going to the lowest index.
    ///
    /// `None` when there is no other curve.
    #[must_use]
    pub fn nearest(&self, i: usize) -> Option<usize> {
        (0..self.n)
            .filter(|&j| j != i)
            .map(|j| (j, self.get(i, j)))
            .min_by(|x, y| x.1.total_cmp(&y.1).then(x.0.cmp(&y.0)))
            .map(|(j, _)| j)
    }
}

/// Off-diagonal access only; use [`PairwiseDistances::get`] for `i == j`.
impl Index<(usize, usize)> for PairwiseDistances {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert_ne!(i, j, "the diagonal is not stored");
        &self.data[slot(i, j)]
    }
}
