//! Period-by-period accumulation of simple and compound interest

use serde::{Deserialize, Serialize};

use super::series::{ProjectionPoint, ProjectionResult};
use crate::input::{Granularity, InterestMode, ProjectionInput, Terms, ValidationError};

/// Default cap on projected periods: 1000 years of monthly periods
pub const DEFAULT_MAX_PERIODS: u32 = 12_000;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Inputs producing more periods than this are rejected
    pub max_periods: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate raw input and project it
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        let terms = input.validate()?;
        self.project_terms(&terms)
    }

    /// Project already-validated terms
    pub fn project_terms(&self, terms: &Terms) -> Result<ProjectionResult, ValidationError> {
        let periods = self.period_count(terms)?;
        let principal = terms.principal();
        let granularity = terms.granularity();

        let points: Vec<ProjectionPoint> = (1..=periods)
            .map(|period| {
                let value = round_cents(accumulated_value(terms, period));
                ProjectionPoint::new(period, granularity, value)
            })
            .collect();

        log::debug!(
            "projected {} {} periods ({:?}) from principal {}",
            periods,
            granularity,
            terms.mode(),
            principal
        );

        Ok(ProjectionResult::new(terms.mode(), granularity, principal, points))
    }

    fn period_count(&self, terms: &Terms) -> Result<u32, ValidationError> {
        let periods = terms.period_count();
        if periods == 0 {
            return Err(ValidationError::PeriodTooShort {
                years: terms.years(),
                granularity: terms.granularity(),
            });
        }
        if periods > self.config.max_periods as u64 {
            return Err(ValidationError::PeriodTooLong {
                periods,
                max: self.config.max_periods,
            });
        }
        Ok(periods as u32)
    }
}

/// Project with the default configuration
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
    ProjectionEngine::default().project(input)
}

/// Unrounded accumulated value at the end of `period`
fn accumulated_value(terms: &Terms, period: u32) -> f64 {
    let principal = terms.principal();
    let annual_rate = terms.annual_rate_percent() / 100.0;
    let n = period as f64;

    match (terms.mode(), terms.granularity()) {
        (InterestMode::Compound, Granularity::Monthly) => {
            principal * (1.0 + annual_rate / 12.0).powi(period as i32)
        }
        (InterestMode::Compound, Granularity::Annual) => {
            principal * (1.0 + annual_rate).powi(period as i32)
        }
        (InterestMode::Simple, Granularity::Monthly) => principal + principal * annual_rate * (n / 12.0),
        (InterestMode::Simple, Granularity::Annual) => principal + principal * annual_rate * n,
    }
}

/// Round to cents, half away from zero. Keeps float noise out of the chart.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(principal: &str, rate: &str, years: &str, compound: bool, monthly: bool) -> ProjectionInput {
        ProjectionInput::new(
            principal,
            rate,
            years,
            InterestMode::from_compounding(compound),
            Granularity::from_monthly(monthly),
        )
    }

    #[test]
    fn test_simple_annual_single_year() {
        let result = project(&input("1000", "10", "1", false, false)).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.points()[0].label, "A1");
        assert_eq!(result.total(), 1100.0);
        assert_eq!(result.interest(), 100.0);
    }

    #[test]
    fn test_compound_monthly_one_year() {
        let result = project(&input("1000", "12", "1", true, true)).unwrap();

        assert_eq!(result.len(), 12);
        assert_eq!(result.points()[11].label, "M12");
        // 1000 * 1.01^12 = 1126.825...
        assert_eq!(result.total(), 1126.83);
        assert_abs_diff_eq!(result.interest(), 126.83, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_stays_flat() {
        let result = project(&input("500", "0", "5", true, false)).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result.values().iter().all(|&v| v == 500.0));
        assert_eq!(result.interest(), 0.0);
    }

    #[test]
    fn test_invalid_principal_rejected() {
        let err = project(&input("abc", "5", "2", false, false)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { .. }));
    }

    #[test]
    fn test_simple_monthly_is_linear() {
        let result = project(&input("1200", "10", "1", false, true)).unwrap();

        // 1200 * 0.10 / 12 = 10 per month
        for (i, point) in result.points().iter().enumerate() {
            assert_abs_diff_eq!(point.value, 1200.0 + 10.0 * (i as f64 + 1.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_compound_annual_values() {
        let result = project(&input("1000", "4", "3", true, false)).unwrap();
        assert_eq!(result.values(), vec![1040.0, 1081.6, 1124.86]);
    }

    #[test]
    fn test_values_rounded_to_cents() {
        let result = project(&input("333.33", "7.77", "10", true, true)).unwrap();
        for point in result.points() {
            assert_abs_diff_eq!(point.value * 100.0, (point.value * 100.0).round(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_length_matches_rounded_period() {
        let cases = [("2.5", false, 3), ("2.4", false, 2), ("2.5", true, 30), ("0.5", false, 1), ("1.04", true, 12)];
        for (years, monthly, expected) in cases {
            let result = project(&input("100", "3", years, false, monthly)).unwrap();
            assert_eq!(result.len(), expected, "years={} monthly={}", years, monthly);
        }
    }

    #[test]
    fn test_zero_periods_rejected() {
        let err = project(&input("100", "3", "0.4", false, false)).unwrap_err();
        assert!(matches!(err, ValidationError::PeriodTooShort { .. }));

        let err = project(&input("100", "3", "0", true, true)).unwrap_err();
        assert!(matches!(err, ValidationError::PeriodTooShort { .. }));
    }

    #[test]
    fn test_period_limit() {
        let engine = ProjectionEngine::new(ProjectionConfig { max_periods: 24 });

        assert!(engine.project(&input("100", "3", "2", false, true)).is_ok());
        let err = engine.project(&input("100", "3", "3", false, true)).unwrap_err();
        assert_eq!(err, ValidationError::PeriodTooLong { periods: 36, max: 24 });
    }

    #[test]
    fn test_huge_years_saturate_to_period_limit() {
        let years = format!("1{}", "0".repeat(30));
        for monthly in [false, true] {
            let err = project(&input("100", "3", &years, true, monthly)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::PeriodTooLong {
                    periods: u64::MAX,
                    max: DEFAULT_MAX_PERIODS
                }
            );
        }
    }

    #[test]
    fn test_compound_never_below_simple() {
        for monthly in [false, true] {
            let simple = project(&input("2500", "6.5", "20", false, monthly)).unwrap();
            let compound = project(&input("2500", "6.5", "20", true, monthly)).unwrap();

            for (s, c) in simple.points().iter().zip(compound.points()) {
                assert!(c.value >= s.value, "period {}: {} < {}", s.period, c.value, s.value);
            }
            assert!(compound.total() > simple.total());
        }
    }

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(round_cents(1.005_000_1), 1.01);
        assert_eq!(round_cents(2.5), 2.5);
        assert_eq!(round_cents(1126.825_030_4), 1126.83);
        assert_eq!(round_cents(-0.125_000_1), -0.13);
    }
}
