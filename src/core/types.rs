//! Core data types for cardinal.
//!
//! Samples are addressed by their row position in the pool. A selection is
//! always a set of positions, never the feature vectors themselves.

use crate::core::error::{CardinalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feature value type for the rows of a sample pool.
pub type Feature = f64;

/// Informativeness score type, one per pool row.
pub type Score = f64;

/// Label type for the labeled subset.
pub type Label = f64;

/// Row position inside the pool passed to a selection call.
pub type SampleIndex = usize;

/// Policy turning informativeness scores into a concrete selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Greedy: keep the `batch_size` highest scores
    Top,
    /// Draw without replacement, weights proportional to scores
    LinearChoice,
    /// Draw without replacement, weights proportional to squared scores
    SquaredChoice,
}

impl SelectionStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SelectionStrategy; 3] = [
        SelectionStrategy::Top,
        SelectionStrategy::LinearChoice,
        SelectionStrategy::SquaredChoice,
    ];

    /// Identifier used in configuration files and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::Top => "top",
            SelectionStrategy::LinearChoice => "linear_choice",
            SelectionStrategy::SquaredChoice => "squared_choice",
        }
    }

    /// Whether this strategy draws from the random source.
    pub fn is_stochastic(&self) -> bool {
        !matches!(self, SelectionStrategy::Top)
    }
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        SelectionStrategy::Top
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionStrategy {
    type Err = CardinalError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(SelectionStrategy::Top),
            "linear_choice" => Ok(SelectionStrategy::LinearChoice),
            "squared_choice" => Ok(SelectionStrategy::SquaredChoice),
            other => Err(CardinalError::unknown_strategy(other)),
        }
    }
}

/// Diagnostic raised when a pool holds fewer rows than the batch size.
///
/// The selection call still succeeds and returns every row of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotEnoughSamples {
    /// Batch size the sampler was asked for
    pub requested: usize,
    /// Rows actually present in the pool
    pub available: usize,
}

impl fmt::Display for NotEnoughSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Requested {} samples but data only has {}.",
            self.requested, self.available
        )
    }
}
