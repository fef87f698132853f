//! Coupling types describing an alignment between two curves.

/// One coupled pair: index `a` in the first curve with index `b` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CouplingStep {
    /// Index in the first curve.
    pub a: usize,
    /// Index in the second curve.
    pub b: usize,
}

/// A monotone sequence of coupled pairs from `(0, 0)` to `(n-1, m-1)`.
///
/// Consecutive steps advance by at most one in each curve and by at least one
/// overall. Empty when either curve is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coupling(Vec<CouplingStep>);

impl Coupling {
    pub(crate) fn new(steps: Vec<CouplingStep>) -> Self {
        Self(steps)
    }

    /// Return the coupled pairs as a slice.
    #[must_use]
    pub fn steps(&self) -> &[CouplingStep] {
        &self.0
    }

    /// Return the number of coupled pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the coupling has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Coupling {
    type Item = &'a CouplingStep;
    type IntoIter = std::slice::Iter<'a, CouplingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
