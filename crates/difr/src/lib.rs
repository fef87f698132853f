//! Similarity measures between ordered point curves.
//!
//! Pure math library, zero I/O. Provides the discrete Fréchet distance, a
//! variant that also reports the cost of its optimal coupling, an averaged
//! Fréchet distance normalized by curve length, and dynamic time warping. All
//! four are evaluated bottom-up over a memo grid, optionally within a
//! Sakoe-Chiba band, for any point type implementing [`Point`].

mod average;
mod constraint;
mod dtw;
mod engine;
mod erase;
mod error;
mod frechet;
mod matrix;
mod pairwise;
mod path;
mod point;
mod weighted;

pub use average::AverageCoefficients;
pub use constraint::BandConstraint;
pub use engine::Frechet;
pub use erase::{AnyPoint, erase};
pub use error::CurveError;
pub use matrix::{DistanceMatrix, UNEVALUATED};
pub use pairwise::{Measure, PairwiseDistances};
pub use path::{Coupling, CouplingStep};
pub use point::{Euclidean, Point, euclidean_curve};
pub use weighted::Weighted;
