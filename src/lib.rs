//! # cardinal
//!
//! Query sampling for active learning. Given a pool of unlabeled samples and
//! an informativeness score per sample, a sampler picks the batch to send for
//! labeling next. Samplers are built once and reused at every iteration of a
//! learn-label-retrain loop.
//!
//! ## Features
//!
//! - **Score-driven selection**: [`ScoredSampler`] turns the scores of any
//!   [`SampleScorer`] into a batch, greedily (`top`) or by weighted draws
//!   without replacement (`linear_choice`, `squared_choice`).
//! - **Reproducibility**: weighted draws come from an explicitly seedable
//!   random source.
//! - **Chaining**: [`ChainSampler`] lets a cheap sampler pre-filter the pool
//!   before an expensive one refines the survivors.
//! - **Graceful small pools**: a pool smaller than the batch is returned
//!   whole, with a [`NotEnoughSamples`] diagnostic instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardinal::{ColumnScorer, QuerySampler, ScoredSampler, SelectionStrategy};
//! use ndarray::array;
//!
//! # fn main() -> cardinal::Result<()> {
//! // Scores computed upstream and stored in the last column
//! let pool = array![[0.1, 0.4], [0.7, 0.9], [0.3, 0.2], [0.5, 0.8]];
//!
//! let mut sampler = ScoredSampler::new(ColumnScorer::new(1), 2, SelectionStrategy::Top)?;
//! let selection = sampler.select_samples(pool.view())?;
//!
//! assert_eq!(selection.indices(), &[3, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: types, constants, error handling and the sampler/scorer traits
//! - [`config`]: sampler configuration from code, files or environment
//! - [`sampler`]: scored, chained and random samplers and their selections

#![doc(html_root_url = "https://docs.rs/cardinal/")]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Sampler implementations
pub mod sampler;

pub use crate::core::{
    constants::*,
    error::{CardinalError, Result},
    traits::*,
    types::*,
};

pub use config::{SamplerConfig, SamplerConfigBuilder};

pub use sampler::{
    merge_into_mask, ChainSampler, ColumnScorer, FnScorer, RandomSampler, ScoredSampler,
    Selection,
};

// Version information
pub use crate::core::constants::CARDINAL_VERSION as VERSION;

/// Initialize the library.
///
/// Sets up logging through `env_logger`. Optional: samplers work without it,
/// their diagnostics simply go nowhere until a logger is installed.
///
/// # Examples
///
/// ```rust
/// fn main() -> cardinal::Result<()> {
///     cardinal::init()?;
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    crate::core::initialize_core()
}

/// Check if the library has been initialized.
pub fn is_initialized() -> bool {
    crate::core::is_core_initialized()
}
