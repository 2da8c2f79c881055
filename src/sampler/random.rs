//! Uniform random baseline sampler.

use crate::core::error::{CardinalError, Result};
use crate::core::traits::QuerySampler;
use crate::core::types::{Feature, Label};
use crate::sampler::Selection;
use ndarray::{ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Picks `batch_size` rows uniformly at random, without replacement.
///
/// Ignores the labeled data entirely; it is the reference every informed
/// sampler is compared against.
#[derive(Debug)]
pub struct RandomSampler {
    batch_size: usize,
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a sampler seeded from system entropy.
    pub fn new(batch_size: usize) -> Result<Self> {
        crate::ensure!(
            batch_size > 0,
            CardinalError::invalid_parameter("batch_size", "0", "must be positive")
        );
        Ok(RandomSampler {
            batch_size,
            seed: None,
            rng: StdRng::from_entropy(),
        })
    }

    /// Reseeds the random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
        self
    }

    /// Seed of the random source, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl QuerySampler for RandomSampler {
    fn fit(&mut self, _x: ArrayView2<'_, Feature>, _y: Option<ArrayView1<'_, Label>>) -> Result<()> {
        Ok(())
    }

    fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection> {
        if let Some(selection) = self.guard_small_pool(x.nrows()) {
            return Ok(selection);
        }
        let indices = index::sample(&mut self.rng, x.nrows(), self.batch_size).into_vec();
        Ok(Selection::new(indices, None))
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::collections::HashSet;

    #[test]
    fn test_random_selection_is_unique_and_in_range() {
        let pool = Array2::<f64>::zeros((40, 2));
        let mut sampler = RandomSampler::new(8).unwrap().with_seed(3);

        let selection = sampler.select_samples(pool.view()).unwrap();
        let unique: HashSet<_> = selection.indices().iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(unique.iter().all(|&i| i < 40));
        assert!(selection.scores().is_none());
    }

    #[test]
    fn test_random_selection_is_reproducible() {
        let pool = Array2::<f64>::zeros((40, 2));
        let mut a = RandomSampler::new(5).unwrap().with_seed(9);
        let mut b = RandomSampler::new(5).unwrap().with_seed(9);

        assert_eq!(
            a.select_samples(pool.view()).unwrap(),
            b.select_samples(pool.view()).unwrap()
        );
    }

    #[test]
    fn test_random_small_pool() {
        let pool = Array2::<f64>::zeros((2, 2));
        let mut sampler = RandomSampler::new(5).unwrap();

        let selection = sampler.select_samples(pool.view()).unwrap();
        assert_eq!(selection.indices(), &[0, 1]);
        assert!(selection.shortfall().is_some());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(RandomSampler::new(0).is_err());
    }
}
