//! Query samplers.
//!
//! - [`ScoredSampler`]: scores the pool with a [`SampleScorer`](crate::core::traits::SampleScorer)
//!   and selects under a [`SelectionStrategy`](crate::core::types::SelectionStrategy)
//! - [`ChainSampler`]: coarse-to-fine composition of samplers
//! - [`RandomSampler`]: uniform baseline
//!
//! Every sampler returns a [`Selection`] of row positions into the pool it
//! was given.

pub mod chain;
pub mod random;
pub mod scored;
pub mod scorer;
pub mod selection;

pub use chain::ChainSampler;
pub use random::RandomSampler;
pub use scored::{normalize_weights, top_k, weighted_choice, ScoredSampler};
pub use scorer::{ColumnScorer, FnScorer};
pub use selection::{merge_into_mask, Selection};
