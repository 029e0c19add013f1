//! Calculator inputs: raw text as typed, and the validated terms derived from it

mod validation;

pub use validation::{is_valid_decimal, parse_decimal, Field, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple or compound accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestMode {
    #[default]
    Simple,
    Compound,
}

impl InterestMode {
    pub fn from_compounding(compounding: bool) -> Self {
        if compounding {
            InterestMode::Compound
        } else {
            InterestMode::Simple
        }
    }
}

/// Length of one projection period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Monthly,
    #[default]
    Annual,
}

impl Granularity {
    pub fn from_monthly(monthly: bool) -> Self {
        if monthly {
            Granularity::Monthly
        } else {
            Granularity::Annual
        }
    }

    /// Periods per year
    pub fn periods_per_year(self) -> f64 {
        match self {
            Granularity::Monthly => 12.0,
            Granularity::Annual => 1.0,
        }
    }

    /// Prefix used for period labels ("M3", "A3")
    pub fn label_prefix(self) -> char {
        match self {
            Granularity::Monthly => 'M',
            Granularity::Annual => 'A',
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Monthly => f.write_str("monthly"),
            Granularity::Annual => f.write_str("annual"),
        }
    }
}

/// Inputs exactly as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub principal: String,
    pub annual_rate_percent: String,
    pub years: String,
    pub mode: InterestMode,
    pub granularity: Granularity,
}

impl ProjectionInput {
    pub fn new(
        principal: impl Into<String>,
        annual_rate_percent: impl Into<String>,
        years: impl Into<String>,
        mode: InterestMode,
        granularity: Granularity,
    ) -> Self {
        Self {
            principal: principal.into(),
            annual_rate_percent: annual_rate_percent.into(),
            years: years.into(),
            mode,
            granularity,
        }
    }

    /// True once all three text fields hold something (valid or not)
    pub fn is_filled(&self) -> bool {
        !self.principal.is_empty() && !self.annual_rate_percent.is_empty() && !self.years.is_empty()
    }

    /// Check the three numeric fields, in the order principal, rate, years
    pub fn validate(&self) -> Result<Terms, ValidationError> {
        Ok(Terms {
            principal: parse_decimal(Field::Principal, &self.principal)?,
            annual_rate_percent: parse_decimal(Field::Rate, &self.annual_rate_percent)?,
            years: parse_decimal(Field::Years, &self.years)?,
            mode: self.mode,
            granularity: self.granularity,
        })
    }
}

/// Validated numeric terms of a projection. Only produced by
/// [`ProjectionInput::validate`], so every amount is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Terms {
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    mode: InterestMode,
    granularity: Granularity,
}

impl Terms {
    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    pub fn mode(&self) -> InterestMode {
        self.mode
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Number of periods before any limit is applied: years (or months)
    /// rounded half away from zero.
    pub fn period_count(&self) -> u64 {
        (self.years * self.granularity.periods_per_year()).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: &str, rate: &str, years: &str) -> ProjectionInput {
        ProjectionInput::new(principal, rate, years, InterestMode::Simple, Granularity::Annual)
    }

    #[test]
    fn test_validate_parses_all_fields() {
        let terms = input("1000", "10", "2.5").validate().unwrap();
        assert_eq!(terms.principal(), 1000.0);
        assert_eq!(terms.annual_rate_percent(), 10.0);
        assert_eq!(terms.years(), 2.5);
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let err = input("abc", "x", "2").validate().unwrap_err();
        assert_eq!(err.field(), Some(Field::Principal));

        let err = input("100", "5", "two").validate().unwrap_err();
        assert_eq!(err.field(), Some(Field::Years));
    }

    #[test]
    fn test_period_count_rounds() {
        let mut raw = input("100", "5", "2.5");
        assert_eq!(raw.validate().unwrap().period_count(), 3);

        raw.granularity = Granularity::Monthly;
        assert_eq!(raw.validate().unwrap().period_count(), 30);

        raw.years = "0.04".to_string();
        assert_eq!(raw.validate().unwrap().period_count(), 0);
    }

    #[test]
    fn test_is_filled() {
        assert!(input("1", "2", "3").is_filled());
        assert!(!input("1", "", "3").is_filled());
        assert!(input("x", "y", "z").is_filled());
    }

    #[test]
    fn test_flag_conversions() {
        assert_eq!(InterestMode::from_compounding(true), InterestMode::Compound);
        assert_eq!(InterestMode::from_compounding(false), InterestMode::Simple);
        assert_eq!(Granularity::from_monthly(true).label_prefix(), 'M');
        assert_eq!(Granularity::from_monthly(false).label_prefix(), 'A');
    }
}
