//! Interest Projection - simple and compound interest series for charting
//!
//! This library provides:
//! - Validation of principal, rate and period as typed by a user
//! - Period-by-period accumulation under simple or compound interest,
//!   counted in months or years
//! - Uniform down-sampling of the series to a fixed number of chart points
//! - Localized result text and CSV export

pub mod input;
pub mod projection;
pub mod sampling;
pub mod format;
pub mod calculator;
pub mod export;

// Re-export commonly used types
pub use input::{Granularity, InterestMode, ProjectionInput, Terms, ValidationError};
pub use projection::{project, ProjectionEngine, ProjectionResult, ProjectionPoint};
pub use sampling::{select_uniform, SampledSeries};
pub use calculator::{Calculator, CalculatorConfig, Rendering};
