//! Projection output: the full period series and its derived figures

use serde::{Deserialize, Serialize};

use crate::input::{Granularity, InterestMode};
use crate::sampling::{select_uniform, SampledSeries};

/// Accumulated value at the end of one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Period number (1-indexed)
    pub period: u32,

    /// Chart label, "M{n}" for months or "A{n}" for years
    pub label: String,

    /// Accumulated amount, rounded to cents
    pub value: f64,
}

impl ProjectionPoint {
    pub fn new(period: u32, granularity: Granularity, value: f64) -> Self {
        Self {
            period,
            label: format!("{}{}", granularity.label_prefix(), period),
            value,
        }
    }
}

/// Complete projection result. Never empty: the engine rejects inputs that
/// would produce zero periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    mode: InterestMode,
    granularity: Granularity,
    principal: f64,
    points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub(crate) fn new(
        mode: InterestMode,
        granularity: Granularity,
        principal: f64,
        points: Vec<ProjectionPoint>,
    ) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            mode,
            granularity,
            principal,
            points,
        }
    }

    pub fn mode(&self) -> InterestMode {
        self.mode
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value of the final period
    pub fn total(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(self.principal)
    }

    /// Interest earned over the whole projection
    pub fn interest(&self) -> f64 {
        self.total() - self.principal
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Pick the points at `indices`. Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> SampledSeries {
        let picked: Vec<&ProjectionPoint> = indices.iter().filter_map(|&i| self.points.get(i)).collect();
        SampledSeries {
            labels: picked.iter().map(|p| p.label.clone()).collect(),
            values: picked.iter().map(|p| p.value).collect(),
        }
    }

    /// Down-sample to at most `target_count` evenly spaced points for a chart
    pub fn sample(&self, target_count: usize) -> SampledSeries {
        self.select(&select_uniform(self.points.len(), target_count))
    }

    /// Get summary figures
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            mode: self.mode,
            granularity: self.granularity,
            periods: self.points.len() as u32,
            principal: self.principal,
            total: self.total(),
            interest: self.interest(),
        }
    }
}

/// Headline figures of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub mode: InterestMode,
    pub granularity: Granularity,
    pub periods: u32,
    pub principal: f64,
    pub total: f64,
    pub interest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ProjectionResult {
        let points = [1010.0, 1020.1, 1030.3]
            .iter()
            .enumerate()
            .map(|(i, &v)| ProjectionPoint::new(i as u32 + 1, Granularity::Monthly, v))
            .collect();
        ProjectionResult::new(InterestMode::Compound, Granularity::Monthly, 1000.0, points)
    }

    #[test]
    fn test_labels_follow_granularity() {
        assert_eq!(ProjectionPoint::new(7, Granularity::Monthly, 0.0).label, "M7");
        assert_eq!(ProjectionPoint::new(7, Granularity::Annual, 0.0).label, "A7");
    }

    #[test]
    fn test_total_and_interest() {
        let result = result();
        assert_eq!(result.total(), 1030.3);
        assert_eq!(result.interest(), 1030.3 - 1000.0);

        let summary = result.summary();
        assert_eq!(summary.periods, 3);
        assert_eq!(summary.total, result.total());
    }

    #[test]
    fn test_select_skips_out_of_range() {
        let series = result().select(&[0, 2, 9]);
        assert_eq!(series.labels, vec!["M1", "M3"]);
        assert_eq!(series.values, vec![1010.0, 1030.3]);
    }
}
