//! Common test utilities for cardinal integration tests.

#![allow(dead_code)]

use cardinal::*;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::prelude::*;

/// Create a pool of random features in [-1, 1)
pub fn create_test_pool(num_samples: usize, num_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Array2::zeros((num_samples, num_features));
    for i in 0..num_samples {
        for j in 0..num_features {
            features[[i, j]] = rng.gen_range(-1.0..1.0);
        }
    }

    features
}

/// Single-column pool whose values are the scores
pub fn pool_from_scores(scores: &[f64]) -> Array2<f64> {
    Array2::from_shape_vec((scores.len(), 1), scores.to_vec()).unwrap()
}

/// Distance to the origin: rows far from the centre score higher
pub fn norm_scores(x: ArrayView2<'_, Feature>) -> Result<Array1<Score>> {
    Ok(x.map_axis(Axis(1), |row| row.dot(&row).sqrt()))
}

/// Scored sampler over the first column of the pool
pub fn first_column_sampler(
    batch_size: usize,
    strategy: SelectionStrategy,
    seed: u64,
) -> ScoredSampler<ColumnScorer> {
    ScoredSampler::new(ColumnScorer::new(0), batch_size, strategy)
        .unwrap()
        .with_seed(seed)
}

/// Check that indices are unique and inside the pool
pub fn assert_valid_selection(indices: &[SampleIndex], pool_size: usize) {
    let mut seen = std::collections::HashSet::new();
    for &index in indices {
        assert!(index < pool_size, "index {} outside pool of {}", index, pool_size);
        assert!(seen.insert(index), "duplicate index {}", index);
    }
}
