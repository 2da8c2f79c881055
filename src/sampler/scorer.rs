//! Adapters that expose externally computed scores through [`SampleScorer`].
//!
//! Informativeness measures themselves (margin, entropy, density, ...) live
//! outside this crate. These adapters let a closure or a precomputed feature
//! column stand in for one.

use crate::core::error::{CardinalError, Result};
use crate::core::traits::SampleScorer;
use crate::core::types::{Feature, Score};
use ndarray::{Array1, ArrayView2, Axis};
use std::fmt;

/// Scorer backed by a closure.
pub struct FnScorer<F> {
    name: String,
    func: F,
}

impl<F> FnScorer<F>
where
    F: Fn(ArrayView2<'_, Feature>) -> Result<Array1<Score>> + Send,
{
    /// Wrap `func` as a scorer.
    pub fn new(func: F) -> Self {
        Self::named("fn_scorer", func)
    }

    /// Wrap `func` under a name shown in log output.
    pub fn named<S: Into<String>>(name: S, func: F) -> Self {
        FnScorer {
            name: name.into(),
            func,
        }
    }
}

impl<F> fmt::Debug for FnScorer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScorer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> SampleScorer for FnScorer<F>
where
    F: Fn(ArrayView2<'_, Feature>) -> Result<Array1<Score>> + Send,
{
    fn score_samples(&self, x: ArrayView2<'_, Feature>) -> Result<Array1<Score>> {
        (self.func)(x)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads the score of each row from one of its feature columns.
///
/// Useful when scores were computed upstream and appended to the pool, since
/// the column follows the rows through every stage of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnScorer {
    column: usize,
}

impl ColumnScorer {
    /// Score rows by the value in `column`.
    pub fn new(column: usize) -> Self {
        ColumnScorer { column }
    }

    /// Column holding the scores.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl SampleScorer for ColumnScorer {
    fn score_samples(&self, x: ArrayView2<'_, Feature>) -> Result<Array1<Score>> {
        if self.column >= x.ncols() {
            return Err(CardinalError::index_out_of_bounds(self.column, x.ncols()));
        }
        Ok(x.index_axis(Axis(1), self.column).to_owned())
    }

    fn name(&self) -> &str {
        "column"
    }
}
