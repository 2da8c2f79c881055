//! Coarse-to-fine query selection inside a toy active-learning loop.
//!
//! A cheap random pre-filter narrows the unlabeled pool, then a squared
//! weighted draw over an uncertainty score picks the batch to "label".
//!
//! Run with `RUST_LOG=debug cargo run --example chain_selection` to see the
//! per-stage diagnostics.

use anyhow::Result;
use cardinal::{
    merge_into_mask, ChainSampler, FnScorer, QuerySampler, RandomSampler, ScoredSampler,
    SelectionStrategy,
};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::prelude::*;

const POOL_SIZE: usize = 200;
const BATCH_SIZE: usize = 8;
const PREFILTER_SIZE: usize = 40;
const ROUNDS: usize = 5;

/// Points near the decision boundary x0 + x1 = 0 are the most uncertain
fn boundary_uncertainty(x: ArrayView2<'_, f64>) -> cardinal::Result<Array1<f64>> {
    Ok(x.map_axis(Axis(1), |row| 1.0 / (1.0 + (row[0] + row[1]).abs())))
}

fn make_pool(seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((POOL_SIZE, 2), |_| rng.gen_range(-1.0..1.0))
}

fn main() -> Result<()> {
    cardinal::init()?;

    let data = make_pool(7);
    let labels = data.map_axis(Axis(1), |row| if row[0] + row[1] > 0.0 { 1.0 } else { 0.0 });

    let refiner = ScoredSampler::new(
        FnScorer::named("boundary_uncertainty", boundary_uncertainty),
        BATCH_SIZE,
        SelectionStrategy::SquaredChoice,
    )?
    .with_seed(11);
    let mut sampler =
        ChainSampler::starting_with(RandomSampler::new(PREFILTER_SIZE)?.with_seed(3)).then(refiner);

    let mut labeled = Array1::from_elem(POOL_SIZE, false);
    labeled[0] = true;

    for round in 1..=ROUNDS {
        let labeled_rows: Vec<usize> = (0..POOL_SIZE).filter(|&i| labeled[i]).collect();
        let unlabeled_rows: Vec<usize> = (0..POOL_SIZE).filter(|&i| !labeled[i]).collect();

        let x_labeled = data.select(Axis(0), &labeled_rows);
        let y_labeled = labels.select(Axis(0), &labeled_rows);
        sampler.fit(x_labeled.view(), Some(y_labeled.view()))?;

        let pool = data.select(Axis(0), &unlabeled_rows);
        let selection = sampler.select_samples(pool.view())?;
        if let Some(shortfall) = selection.shortfall() {
            log::warn!("round {}: {}", round, shortfall);
        }

        let picked: Vec<usize> = selection.indices().iter().map(|&i| unlabeled_rows[i]).collect();
        let added = merge_into_mask(&mut labeled, &selection)?;
        let mean_uncertainty = boundary_uncertainty(data.select(Axis(0), &picked).view())?
            .mean()
            .unwrap_or(0.0);

        println!(
            "round {}: labeled {} new rows {:?} (mean uncertainty {:.3}), {} labeled in total",
            round,
            added,
            picked,
            mean_uncertainty,
            labeled.iter().filter(|&&l| l).count()
        );
    }

    Ok(())
}
