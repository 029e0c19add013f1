//! Projection engine producing the accumulated-value series

mod engine;
mod series;

pub use engine::{project, round_cents, ProjectionConfig, ProjectionEngine, DEFAULT_MAX_PERIODS};
pub use series::{ProjectionPoint, ProjectionResult, ProjectionSummary};
