//! Uniform down-sampling of a series for chart display
//!
//! A chart should show a fixed, readable number of points however many
//! periods were projected. [`select_uniform`] picks evenly spaced indices and
//! always keeps the first and last period so the chart spans the whole
//! projection.

use serde::{Deserialize, Serialize};

/// Default number of points shown on a chart
pub const DEFAULT_SAMPLE_POINTS: usize = 6;

/// Select at most `target_count` evenly spaced indices into a series of
/// `length` items.
///
/// Short series are returned whole. Longer ones use a step of
/// `length / (target_count - 1)` from index 0 and finish with `length - 1`.
/// The result is strictly increasing, starts at 0 and ends at `length - 1`.
/// A `target_count` of 0 means [`DEFAULT_SAMPLE_POINTS`]. A `target_count`
/// of 1 is treated as 2 once reduction is needed, since both ends must be
/// present.
pub fn select_uniform(length: usize, target_count: usize) -> Vec<usize> {
    let target_count = if target_count == 0 { DEFAULT_SAMPLE_POINTS } else { target_count };
    if length <= target_count {
        return (0..length).collect();
    }

    let target = target_count.max(2);
    let step = length / (target - 1);

    let mut indices: Vec<usize> = (0..target - 1).map(|i| i * step).filter(|&i| i < length - 1).collect();
    indices.push(length - 1);
    indices.dedup();

    log::trace!("sampled {} of {} points with step {}", indices.len(), length, step);
    indices
}

/// Labels and values picked from a projection for a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SampledSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (label, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}
