//! Selection results returned by the samplers.

use crate::core::error::{CardinalError, Result};
use crate::core::types::{NotEnoughSamples, SampleIndex, Score};
use ndarray::Array1;

/// Outcome of one `select_samples` call.
///
/// Indices refer to rows of the pool passed to that call. The scores that
/// drove the selection travel with it instead of being cached on the sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    indices: Vec<SampleIndex>,
    scores: Option<Array1<Score>>,
    shortfall: Option<NotEnoughSamples>,
}

impl Selection {
    /// Selection made after scoring the pool.
    pub fn new(indices: Vec<SampleIndex>, scores: Option<Array1<Score>>) -> Self {
        Selection {
            indices,
            scores,
            shortfall: None,
        }
    }

    /// Selection with no indices.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    /// Every row of a pool smaller than the batch size, in natural order.
    pub fn whole_pool(pool_size: usize, shortfall: NotEnoughSamples) -> Self {
        Selection {
            indices: (0..pool_size).collect(),
            scores: None,
            shortfall: Some(shortfall),
        }
    }

    /// Attach a shortfall diagnostic raised upstream.
    pub fn with_shortfall(mut self, shortfall: Option<NotEnoughSamples>) -> Self {
        self.shortfall = shortfall;
        self
    }

    /// Selected row positions.
    pub fn indices(&self) -> &[SampleIndex] {
        &self.indices
    }

    /// Consume the selection, keeping only the row positions.
    pub fn into_indices(self) -> Vec<SampleIndex> {
        self.indices
    }

    /// Scores of the whole pool, when the selection was score based.
    pub fn scores(&self) -> Option<&Array1<Score>> {
        self.scores.as_ref()
    }

    /// Diagnostic raised when the pool was smaller than the batch size.
    pub fn shortfall(&self) -> Option<NotEnoughSamples> {
        self.shortfall
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Boolean mask over a pool of `pool_size` rows.
    pub fn to_mask(&self, pool_size: usize) -> Result<Array1<bool>> {
        let mut mask = Array1::from_elem(pool_size, false);
        for &index in &self.indices {
            if index >= pool_size {
                return Err(CardinalError::index_out_of_bounds(index, pool_size));
            }
            mask[index] = true;
        }
        Ok(mask)
    }
}

/// Mark the rows picked from the unlabeled part of a pool as labeled.
///
/// `selection` indexes the rows of `labeled` that are still `false`, in order,
/// which is how the unlabeled pool is carved out of the full data set at each
/// iteration of a learn-label loop. Returns the number of newly labeled rows.
pub fn merge_into_mask(labeled: &mut Array1<bool>, selection: &Selection) -> Result<usize> {
    let unlabeled: Vec<usize> = labeled
        .iter()
        .enumerate()
        .filter(|(_, is_labeled)| !**is_labeled)
        .map(|(i, _)| i)
        .collect();

    // Resolve every position before touching the mask
    let rows = selection
        .indices()
        .iter()
        .map(|&index| {
            unlabeled
                .get(index)
                .copied()
                .ok_or_else(|| CardinalError::index_out_of_bounds(index, unlabeled.len()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut added = 0;
    for row in rows {
        if !labeled[row] {
            labeled[row] = true;
            added += 1;
        }
    }
    Ok(added)
}
