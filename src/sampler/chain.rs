//! Coarse-to-fine composition of query samplers.
//!
//! A cheap sampler first reduces the pool, then each following sampler
//! refines the survivors of the previous one. Only the first stage is fit on
//! the labeled data; the refiners are fit on the surviving rows at selection
//! time, without labels.

use crate::core::error::{CardinalError, Result};
use crate::core::traits::QuerySampler;
use crate::core::types::{Feature, Label, SampleIndex};
use crate::sampler::Selection;
use ndarray::{ArrayView1, ArrayView2, Axis};

/// Ordered chain of samplers, each narrowing the candidates of the previous.
#[derive(Debug)]
pub struct ChainSampler {
    samplers: Vec<Box<dyn QuerySampler>>,
}

impl ChainSampler {
    /// Creates a chain from one or more samplers, first stage first.
    pub fn new(samplers: Vec<Box<dyn QuerySampler>>) -> Result<Self> {
        if samplers.is_empty() {
            return Err(CardinalError::EmptyChain);
        }
        Ok(ChainSampler { samplers })
    }

    /// Creates a chain with a single stage.
    pub fn starting_with<Q: QuerySampler + 'static>(sampler: Q) -> Self {
        ChainSampler {
            samplers: vec![Box::new(sampler)],
        }
    }

    /// Appends a refining stage.
    pub fn then<Q: QuerySampler + 'static>(mut self, sampler: Q) -> Self {
        self.samplers.push(Box::new(sampler));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    /// Always false: a chain holds at least one stage.
    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }

    /// The stages, first stage first.
    pub fn stages(&self) -> &[Box<dyn QuerySampler>] {
        &self.samplers
    }
}

impl QuerySampler for ChainSampler {
    fn fit(&mut self, x: ArrayView2<'_, Feature>, y: Option<ArrayView1<'_, Label>>) -> Result<()> {
        let first = self.samplers.first_mut().ok_or(CardinalError::EmptyChain)?;
        first.fit(x, y)
    }

    fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection> {
        let (first, refiners) = self
            .samplers
            .split_first_mut()
            .ok_or(CardinalError::EmptyChain)?;

        let coarse = first.select_samples(x)?;
        let mut shortfall = coarse.shortfall();
        let mut selected = coarse.into_indices();
        check_indices(&selected, x.nrows())?;
        log::debug!(
            "chain stage 0 ({}): kept {} of {} samples",
            first.name(),
            selected.len(),
            x.nrows()
        );

        for (stage, sampler) in refiners.iter_mut().enumerate() {
            let survivors = x.select(Axis(0), &selected);
            sampler.fit(survivors.view(), None)?;
            let refined = sampler.select_samples(survivors.view())?;
            shortfall = shortfall.or(refined.shortfall());

            check_indices(refined.indices(), selected.len())?;
            selected = refined.indices().iter().map(|&i| selected[i]).collect();
            log::debug!(
                "chain stage {} ({}): kept {} of {} samples",
                stage + 1,
                sampler.name(),
                selected.len(),
                survivors.nrows()
            );
        }

        Ok(Selection::new(selected, None).with_shortfall(shortfall))
    }

    fn batch_size(&self) -> usize {
        self.samplers
            .iter()
            .map(|sampler| sampler.batch_size())
            .min()
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "chain"
    }
}

fn check_indices(indices: &[SampleIndex], pool_size: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= pool_size) {
        Some(&index) => Err(CardinalError::index_out_of_bounds(index, pool_size)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SelectionStrategy;
    use crate::sampler::{ColumnScorer, RandomSampler, ScoredSampler};
    use ndarray::{array, Array2};
    use std::sync::{Arc, Mutex};

    /// Records the pool sizes it is fit on and returns a fixed selection.
    #[derive(Debug)]
    struct Recorder {
        fits: Arc<Mutex<Vec<(usize, bool)>>>,
        picks: Vec<usize>,
        batch_size: usize,
    }

    impl QuerySampler for Recorder {
        fn fit(&mut self, x: ArrayView2<'_, Feature>, y: Option<ArrayView1<'_, Label>>) -> Result<()> {
            self.fits.lock().unwrap().push((x.nrows(), y.is_some()));
            Ok(())
        }

        fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection> {
            if let Some(selection) = self.guard_small_pool(x.nrows()) {
                return Ok(selection);
            }
            Ok(Selection::new(self.picks.clone(), None))
        }

        fn batch_size(&self) -> usize {
            self.batch_size
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    fn top(column: usize, batch_size: usize) -> ScoredSampler<ColumnScorer> {
        ScoredSampler::new(ColumnScorer::new(column), batch_size, SelectionStrategy::Top).unwrap()
    }

    fn two_column_pool() -> Array2<f64> {
        // column 0: coarse score, column 1: fine score
        array![
            [0.9, 0.1],
            [0.1, 0.9],
            [0.8, 0.7],
            [0.7, 0.2],
            [0.2, 0.8],
            [0.6, 0.9],
            [0.5, 0.3],
            [0.3, 0.6],
        ]
    }

    #[test]
    fn test_empty_chain_rejected() {
        assert!(matches!(
            ChainSampler::new(Vec::new()),
            Err(CardinalError::EmptyChain)
        ));
    }

    #[test]
    fn test_single_stage_chain_matches_stage() {
        let pool = two_column_pool();
        let mut chain = ChainSampler::starting_with(top(0, 3));
        let mut alone = top(0, 3);

        assert_eq!(
            chain.select_samples(pool.view()).unwrap().indices(),
            alone.select_samples(pool.view()).unwrap().indices()
        );
    }

    #[test]
    fn test_two_stage_indices_map_to_original_pool() {
        let pool = two_column_pool();
        let mut chain = ChainSampler::starting_with(top(0, 4)).then(top(1, 2));

        // Stage 0 keeps rows [5, 3, 2, 0] (coarse 0.6, 0.7, 0.8, 0.9).
        // Their fine scores are [0.9, 0.2, 0.7, 0.1]; the top two are rows 2 and 5.
        let selection = chain.select_samples(pool.view()).unwrap();
        assert_eq!(selection.indices(), &[2, 5]);
        assert!(selection.scores().is_none());
        assert_eq!(chain.batch_size(), 2);
    }

    #[test]
    fn test_fit_only_touches_first_stage() {
        let fits = Arc::new(Mutex::new(Vec::new()));
        let first = Recorder {
            fits: Arc::clone(&fits),
            picks: vec![0, 2, 4, 6],
            batch_size: 4,
        };
        let second = Recorder {
            fits: Arc::clone(&fits),
            picks: vec![1, 3],
            batch_size: 2,
        };
        let mut chain = ChainSampler::starting_with(first).then(second);

        let labeled = Array2::<f64>::zeros((5, 2));
        let labels = array![0.0, 1.0, 0.0, 1.0, 1.0];
        chain.fit(labeled.view(), Some(labels.view())).unwrap();
        assert_eq!(*fits.lock().unwrap(), vec![(5, true)]);

        let pool = Array2::<f64>::zeros((8, 2));
        let selection = chain.select_samples(pool.view()).unwrap();
        assert_eq!(selection.indices(), &[2, 6]);

        // The refiner is fit on the four survivors, without labels
        assert_eq!(*fits.lock().unwrap(), vec![(5, true), (4, false)]);
    }

    #[test]
    fn test_empty_stage_empties_the_rest() {
        let fits = Arc::new(Mutex::new(Vec::new()));
        let nothing = Recorder {
            fits: Arc::clone(&fits),
            picks: Vec::new(),
            batch_size: 3,
        };
        let mut chain = ChainSampler::starting_with(nothing).then(top(1, 2));

        let selection = chain.select_samples(two_column_pool().view()).unwrap();
        assert!(selection.is_empty());
        assert!(selection.shortfall().is_none());
    }

    #[test]
    fn test_shortfall_is_carried_through() {
        let pool = two_column_pool();
        let mut chain = ChainSampler::starting_with(top(0, 20)).then(top(1, 3));

        let selection = chain.select_samples(pool.view()).unwrap();
        assert_eq!(selection.len(), 3);
        let shortfall = selection.shortfall().unwrap();
        assert_eq!(shortfall.requested, 20);
        assert_eq!(shortfall.available, 8);
    }

    #[test]
    fn test_stage_errors_propagate() {
        let pool = array![[1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]];
        let weighted = ScoredSampler::new(
            ColumnScorer::new(1),
            2,
            SelectionStrategy::LinearChoice,
        )
        .unwrap()
        .with_seed(1);
        let mut chain = ChainSampler::starting_with(top(0, 3)).then(weighted);

        assert!(matches!(
            chain.select_samples(pool.view()),
            Err(CardinalError::DegenerateWeights { .. })
        ));
    }

    #[test]
    fn test_out_of_range_stage_output_rejected() {
        let fits = Arc::new(Mutex::new(Vec::new()));
        let rogue = Recorder {
            fits,
            picks: vec![0, 9],
            batch_size: 2,
        };
        let mut chain = ChainSampler::starting_with(top(0, 3)).then(rogue);

        assert!(matches!(
            chain.select_samples(two_column_pool().view()),
            Err(CardinalError::IndexOutOfBounds { index: 9, length: 3 })
        ));
    }

    #[test]
    fn test_nested_chain_and_random_stage() {
        let pool = two_column_pool();
        let inner = ChainSampler::starting_with(RandomSampler::new(6).unwrap().with_seed(4))
            .then(top(0, 4));
        let mut outer = ChainSampler::starting_with(inner).then(top(1, 2));

        let selection = outer.select_samples(pool.view()).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.batch_size(), 2);
        assert!(selection.indices().iter().all(|&i| i < pool.nrows()));
    }
}
