//! Sakoe-Chiba window limiting which cells of the memo grid are evaluated.

use std::ops::Range;

/// Constraint on which index pairs a coupling may visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandConstraint {
    /// Every cell of the grid is evaluated.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band: cell `(i, j)` is evaluated only if `|i - j| <= radius`.
    SakoeChibaRadius(usize),
}

impl BandConstraint {
    /// Return the columns of row `row` that lie inside the band.
    ///
    /// For [`Unconstrained`][Self::Unconstrained] this is `0..n_cols`. For a
    /// Sakoe-Chiba radius `r` it is `[row - r, row + r]` clipped to `[0, n_cols)`,
    /// which is empty when the whole row falls outside the grid.
    #[must_use]
    pub fn column_range(&self, row: usize, n_cols: usize) -> Range<usize> {
        match self {
            Self::Unconstrained => 0..n_cols,
            Self::SakoeChibaRadius(r) => {
                let end = (row + r + 1).min(n_cols);
                let start = row.saturating_sub(*r).min(end);
                start..end
            }
        }
    }

    /// Return true if cell `(i, j)` lies inside the band.
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::SakoeChibaRadius(r) => i.abs_diff(j) <= *r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_full_range() {
        let c = BandConstraint::Unconstrained;
        assert_eq!(c.column_range(0, 10), 0..10);
        assert_eq!(c.column_range(5, 10), 0..10);
        assert!(c.contains(0, 9));
    }

    #[test]
    fn sakoe_chiba_middle_row() {
        let c = BandConstraint::SakoeChibaRadius(2);
        assert_eq!(c.column_range(5, 10), 3..8);
    }

    #[test]
    fn sakoe_chiba_first_row() {
        let c = BandConstraint::SakoeChibaRadius(2);
        assert_eq!(c.column_range(0, 10), 0..3);
    }

    #[test]
    fn sakoe_chiba_last_row() {
        let c = BandConstraint::SakoeChibaRadius(2);
        assert_eq!(c.column_range(9, 10), 7..10);
    }

    #[test]
    fn sakoe_chiba_radius_exceeds_size() {
        let c = BandConstraint::SakoeChibaRadius(20);
        assert_eq!(c.column_range(3, 5), 0..5);
    }

    #[test]
    fn row_past_the_grid_is_empty() {
        // Tall first curve against a short second one: row 9 sits far below column 2.
        let c = BandConstraint::SakoeChibaRadius(1);
        assert!(c.column_range(9, 3).is_empty());
    }

    #[test]
    fn contains_matches_column_range() {
        let c = BandConstraint::SakoeChibaRadius(1);
        for i in 0..6 {
            let range = c.column_range(i, 4);
            for j in 0..4 {
                assert_eq!(c.contains(i, j), range.contains(&j), "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn default_is_unconstrained() {
        assert_eq!(BandConstraint::default(), BandConstraint::Unconstrained);
    }
}
