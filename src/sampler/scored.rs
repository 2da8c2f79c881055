//! Score-driven query sampling.
//!
//! Most query sampling methods score every sample of the pool and then pick
//! samples from those scores. [`ScoredSampler`] owns the picking part and
//! delegates the scoring to a [`SampleScorer`].

use crate::config::SamplerConfig;
use crate::core::error::{CardinalError, Result};
use crate::core::traits::{QuerySampler, SampleScorer};
use crate::core::types::*;
use crate::sampler::Selection;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Sampler turning per-row scores into a selection under a [`SelectionStrategy`].
#[derive(Debug)]
pub struct ScoredSampler<S> {
    scorer: S,
    batch_size: usize,
    strategy: SelectionStrategy,
    seed: Option<u64>,
    rng: StdRng,
}

impl<S: SampleScorer> ScoredSampler<S> {
    /// Creates a sampler seeded from system entropy.
    pub fn new(scorer: S, batch_size: usize, strategy: SelectionStrategy) -> Result<Self> {
        crate::ensure!(
            batch_size > 0,
            CardinalError::invalid_parameter("batch_size", "0", "must be positive")
        );

        Ok(ScoredSampler {
            scorer,
            batch_size,
            strategy,
            seed: None,
            rng: StdRng::from_entropy(),
        })
    }

    /// Creates a sampler from a validated configuration.
    pub fn from_config(scorer: S, config: &SamplerConfig) -> Result<Self> {
        config.validate()?;
        let sampler = Self::new(scorer, config.batch_size, config.selection_strategy()?)?;
        Ok(match config.random_seed {
            Some(seed) => sampler.with_seed(seed),
            None => sampler,
        })
    }

    /// Reseeds the random source for reproducible weighted draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Uses an already constructed random source.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self.seed = None;
        self
    }

    /// Resets the random source to the start of the stream for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    /// Selection strategy fixed at construction.
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Seed of the random source, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The wrapped informativeness measure.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Mutable access to the wrapped measure.
    pub fn scorer_mut(&mut self) -> &mut S {
        &mut self.scorer
    }

    /// Scores the pool with the wrapped measure.
    ///
    /// Every row must receive exactly one finite score.
    pub fn score_samples(&self, x: ArrayView2<'_, Feature>) -> Result<Array1<Score>> {
        let scores = self.scorer.score_samples(x)?;
        if scores.len() != x.nrows() {
            return Err(CardinalError::dimension_mismatch(
                format!("{} scores", x.nrows()),
                format!("{} scores", scores.len()),
            ));
        }
        if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(CardinalError::invalid_score(index, value));
        }
        Ok(scores)
    }
}

impl<S: SampleScorer> QuerySampler for ScoredSampler<S> {
    fn fit(&mut self, x: ArrayView2<'_, Feature>, y: Option<ArrayView1<'_, Label>>) -> Result<()> {
        self.scorer.fit(x, y)
    }

    fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection> {
        if let Some(selection) = self.guard_small_pool(x.nrows()) {
            return Ok(selection);
        }

        let scores = self.score_samples(x)?;
        log::debug!(
            "{}: selecting {} of {} samples with strategy {}",
            self.scorer.name(),
            self.batch_size,
            scores.len(),
            self.strategy
        );

        let indices = match self.strategy {
            SelectionStrategy::Top => top_k(&scores, self.batch_size),
            SelectionStrategy::LinearChoice => weighted_choice(
                &mut self.rng,
                &scores,
                self.batch_size,
                self.strategy,
            )?,
            SelectionStrategy::SquaredChoice => weighted_choice(
                &mut self.rng,
                &scores.mapv(|s| s * s),
                self.batch_size,
                self.strategy,
            )?,
        };

        Ok(Selection::new(indices, Some(scores)))
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn name(&self) -> &str {
        self.scorer.name()
    }
}

/// Positions of the `k` highest scores, in ascending score order.
///
/// Equal scores keep their original relative order, so among ties the
/// highest positions are the ones kept.
pub fn top_k(scores: &Array1<Score>, k: usize) -> Vec<SampleIndex> {
    let mut order: Vec<SampleIndex> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    order.split_off(order.len().saturating_sub(k))
}

/// Normalizes non-negative weights into a probability vector.
pub fn normalize_weights(weights: &Array1<f64>, strategy: SelectionStrategy) -> Result<Array1<f64>> {
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(CardinalError::degenerate_weights(
            strategy.as_str(),
            format!("weight at index {} is {}, weights must be finite and non-negative", i, w),
        ));
    }

    let total = weights.sum();
    if !(total > 0.0) || !total.is_finite() {
        return Err(CardinalError::degenerate_weights(
            strategy.as_str(),
            format!("sum of weights is {}, cannot normalize", total),
        ));
    }

    Ok(weights / total)
}

/// Draws `amount` distinct positions, each with probability proportional to
/// its weight among those not drawn yet.
///
/// Rows with zero weight are never drawn.
pub fn weighted_choice<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &Array1<f64>,
    amount: usize,
    strategy: SelectionStrategy,
) -> Result<Vec<SampleIndex>> {
    let probabilities = normalize_weights(weights, strategy)?;

    let mut candidates: Vec<(SampleIndex, f64)> = probabilities
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, p)| p > 0.0)
        .collect();
    if candidates.len() < amount {
        return Err(CardinalError::degenerate_weights(
            strategy.as_str(),
            format!(
                "only {} of {} weights are positive, cannot draw {} without replacement",
                candidates.len(),
                probabilities.len(),
                amount
            ),
        ));
    }

    // One draw at a time, renormalizing over the rows still in the running
    let mut drawn = Vec::with_capacity(amount);
    while drawn.len() < amount {
        let distribution = WeightedIndex::new(candidates.iter().map(|&(_, p)| p))
            .map_err(|e| CardinalError::sampling(e.to_string()))?;
        let (index, _) = candidates.remove(distribution.sample(rng));
        drawn.push(index);
    }
    Ok(drawn)
}
