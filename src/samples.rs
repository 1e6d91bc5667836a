//! Accumulated samples.
//!
//! A [`SampleSet`] is append-only: it grows by whole batches via
//! [`append_batch`] and is emptied by [`reset`]. Both return a new value
//! instead of mutating shared state, so the owner decides when to replace its
//! current set.

use log::debug;

use crate::estimate::estimate_pi;
use crate::point::Point;
use crate::sampler::Batch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    points: Vec<Point>,
    inside: usize,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn inside_count(&self) -> usize {
        self.inside
    }
    pub fn total_count(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn estimate(&self) -> Option<f64> {
        estimate_pi(self.inside, self.total_count())
    }

    /// Same samples with every coordinate multiplied by `factor`.
    ///
    /// Inside counts are kept as recorded: disk membership does not change
    /// under uniform scaling of both the square and the points.
    pub fn rescaled(self, factor: f64) -> Self {
        Self {
            points: self.points.into_iter().map(|p| p.scaled(factor)).collect(),
            inside: self.inside,
        }
    }
}

/// Merges a batch into the running set, keeping generation order.
pub fn append_batch(state: SampleSet, batch: Batch) -> SampleSet {
    debug!(
        "append_batch(total = {}, batch = {}, batch inside = {})",
        state.total_count(),
        batch.len(),
        batch.inside
    );
    debug_assert!(batch.inside <= batch.len());

    let SampleSet { mut points, inside } = state;
    points.extend(batch.points);
    SampleSet {
        points,
        inside: inside + batch.inside,
    }
}

/// The empty sample set.
pub fn reset() -> SampleSet {
    debug!("reset()");
    SampleSet::default()
}
