//! Core trait definitions for cardinal.
//!
//! [`QuerySampler`] is the lifecycle every sampler follows inside an
//! active-learning loop: `fit` on what is labeled so far, then
//! `select_samples` on what is not. [`SampleScorer`] is the narrower
//! capability a concrete informativeness measure provides; it is composed
//! into a sampler through [`ScoredSampler`](crate::sampler::ScoredSampler).

use crate::core::error::Result;
use crate::core::types::*;
use crate::sampler::Selection;
use ndarray::{Array1, ArrayView1, ArrayView2};

use std::fmt::Debug;

/// A query sampler picks the rows of an unlabeled pool to annotate next.
pub trait QuerySampler: Send + Debug {
    /// Update internal state from the currently labeled samples.
    ///
    /// Later calls override the state left by earlier ones.
    fn fit(&mut self, x: ArrayView2<'_, Feature>, y: Option<ArrayView1<'_, Label>>) -> Result<()>;

    /// Select at most `batch_size()` unique row positions of `x`.
    fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection>;

    /// Maximum number of indices a single selection may return.
    fn batch_size(&self) -> usize;

    /// Sampler name used in log output.
    fn name(&self) -> &str;

    /// Degenerate-pool guard shared by every sampler.
    ///
    /// When the pool holds fewer rows than `batch_size()`, returns the whole
    /// pool in natural order together with a [`NotEnoughSamples`] diagnostic,
    /// and the caller must return it as is. An empty pool yields an empty
    /// selection without a diagnostic.
    fn guard_small_pool(&self, pool_size: usize) -> Option<Selection> {
        let requested = self.batch_size();
        if pool_size >= requested {
            return None;
        }
        if pool_size == 0 {
            log::debug!("{}: empty pool, nothing to select", self.name());
            return Some(Selection::empty());
        }

        let shortfall = NotEnoughSamples {
            requested,
            available: pool_size,
        };
        log::warn!("{}: {}", self.name(), shortfall);
        Some(Selection::whole_pool(pool_size, shortfall))
    }
}

impl<T: QuerySampler + ?Sized> QuerySampler for Box<T> {
    fn fit(&mut self, x: ArrayView2<'_, Feature>, y: Option<ArrayView1<'_, Label>>) -> Result<()> {
        (**self).fit(x, y)
    }

    fn select_samples(&mut self, x: ArrayView2<'_, Feature>) -> Result<Selection> {
        (**self).select_samples(x)
    }

    fn batch_size(&self) -> usize {
        (**self).batch_size()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Informativeness measure: one score per pool row, higher means more
/// valuable to label.
///
/// Weighted strategies additionally require every score to be non-negative.
pub trait SampleScorer: Send + Debug {
    /// Update the measure from labeled samples. Most measures are stateless.
    fn fit(&mut self, _x: ArrayView2<'_, Feature>, _y: Option<ArrayView1<'_, Label>>) -> Result<()> {
        Ok(())
    }

    /// Score every row of `x`, in row order.
    fn score_samples(&self, x: ArrayView2<'_, Feature>) -> Result<Array1<Score>>;

    /// Measure name used in log output.
    fn name(&self) -> &str {
        "scorer"
    }
}
