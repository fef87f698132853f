//! Dense memo grid for the curve recurrences.

/// Sentinel marking a cell that has not been evaluated.
///
/// Every legal result is non-negative, so a negative sentinel can never collide
/// with a finalized value as long as the metric honors its contract.
pub const UNEVALUATED: f64 = -1.0;

/// Dense `rows × cols` grid of `f64` stored row-major in one flat vector.
///
/// Cells start at the sentinel and are written at most once. Rows index the
/// first curve, columns the second.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    sentinel: f64,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Create a grid with every cell set to `sentinel`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, sentinel: f64) -> Self {
        Self {
            rows,
            cols,
            sentinel,
            data: vec![sentinel; rows * cols],
        }
    }

    /// Create a grid filled with [`UNEVALUATED`].
    #[must_use]
    pub fn unevaluated(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, UNEVALUATED)
    }

    /// Return the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the sentinel this grid was created with.
    #[must_use]
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Return the raw value at `(i, j)`, which may be the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    /// Write the finalized value of `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`. Debug builds also panic when the
    /// cell was already written.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.offset(i, j);
        debug_assert!(
            self.data[idx] == self.sentinel,
            "cell ({i}, {j}) written twice"
        );
        self.data[idx] = value;
    }

    /// Return true if `(i, j)` holds a finalized value.
    #[must_use]
    pub fn is_evaluated(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != self.sentinel
    }

    /// Return the value at `(i, j)` as a predecessor: unevaluated cells read as infinity.
    #[must_use]
    pub fn settled(&self, i: usize, j: usize) -> f64 {
        let v = self.get(i, j);
        if v == self.sentinel { f64::INFINITY } else { v }
    }

    /// Return the value at the last row and column, or `None` for an empty grid.
    #[must_use]
    pub fn terminal(&self) -> Option<f64> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        Some(self.settled(self.rows - 1, self.cols - 1))
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        assert!(
            j < self.cols,
            "column index {j} out of bounds for {} columns",
            self.cols
        );
        i * self.cols + j
    }
}
