//! Decimal-text validation for calculator inputs

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use super::Granularity;

/// Which of the three numeric inputs a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Principal,
    Rate,
    Years,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Principal => "principal",
            Field::Rate => "rate",
            Field::Years => "years",
        };
        f.write_str(name)
    }
}

/// Rejection of calculator input. Every variant is recoverable by the user
/// correcting what they typed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid {field}: {value:?} is not a non-negative decimal number")]
    InvalidNumber { field: Field, value: String },

    #[error("period too short: {years} years gives no {granularity} periods")]
    PeriodTooShort { years: f64, granularity: Granularity },

    #[error("period too long: {periods} periods exceeds the limit of {max}")]
    PeriodTooLong { periods: u64, max: u32 },
}

impl ValidationError {
    /// Offending input field, when the failure is tied to a single field
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::InvalidNumber { field, .. } => Some(*field),
            ValidationError::PeriodTooShort { .. } | ValidationError::PeriodTooLong { .. } => {
                Some(Field::Years)
            }
        }
    }
}

fn decimal_pattern() -> &'static Regex {
    static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digit classes.
    DECIMAL_RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid regex"))
}

/// Whether `text`, once trimmed, is a plain non-negative decimal:
/// digits with an optional fractional part, no sign and no exponent.
pub fn is_valid_decimal(text: &str) -> bool {
    decimal_pattern().is_match(text.trim())
}

/// Parse a trimmed decimal, reporting `field` on failure
pub fn parse_decimal(field: Field, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let invalid = || ValidationError::InvalidNumber {
        field,
        value: text.to_string(),
    };

    if !is_valid_decimal(trimmed) {
        return Err(invalid());
    }

    // Very long digit strings parse to infinity; treat them like bad input.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}
