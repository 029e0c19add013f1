//! Calculator session: holds the latest inputs and recomputes on demand
//!
//! The presentation layer forwards every edit here. Text edits are only
//! stored; a button press calls [`Calculator::calculate`], and toggling a
//! switch recomputes straight away once all three fields hold something.
//! Each recompute starts from scratch and returns a fresh [`Rendering`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::format::{invalid_input_message, result_text, Language};
use crate::input::{Granularity, InterestMode, ProjectionInput, ValidationError};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::sampling::SampledSeries;

/// Points shown on the calculator's chart
pub const DEFAULT_CHART_POINTS: usize = 7;

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of chart points
    pub sample_points: usize,

    /// Language of result and error text
    pub language: Language,

    /// Engine limits
    pub projection: ProjectionConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            sample_points: DEFAULT_CHART_POINTS,
            language: Language::default(),
            projection: ProjectionConfig::default(),
        }
    }
}

/// What the presentation layer should show after a recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rendering {
    /// Result text plus the down-sampled chart series
    Projected {
        text: String,
        chart: SampledSeries,
        #[serde(skip)]
        result: ProjectionResult,
    },
    /// Fixed user message; any chart on screen should be cleared
    Rejected {
        message: String,
        #[serde(skip)]
        error: ValidationError,
    },
}

impl Rendering {
    /// Text for the result area
    pub fn text(&self) -> &str {
        match self {
            Rendering::Projected { text, .. } => text,
            Rendering::Rejected { message, .. } => message,
        }
    }

    /// Chart series, `None` when the chart must be cleared
    pub fn chart(&self) -> Option<&SampledSeries> {
        match self {
            Rendering::Projected { chart, .. } => Some(chart),
            Rendering::Rejected { .. } => None,
        }
    }

    pub fn result(&self) -> Option<&ProjectionResult> {
        match self {
            Rendering::Projected { result, .. } => Some(result),
            Rendering::Rejected { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Rendering::Rejected { error, .. } => Some(error),
            Rendering::Projected { .. } => None,
        }
    }
}

/// Outcome of one mode/granularity combination in [`Calculator::compare_modes`]
#[derive(Debug, Clone, PartialEq)]
pub struct ModeComparison {
    pub mode: InterestMode,
    pub granularity: Granularity,
    pub outcome: Result<ProjectionResult, ValidationError>,
}

/// Calculator session
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
    engine: ProjectionEngine,
    input: ProjectionInput,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            engine: ProjectionEngine::new(config.projection),
            input: ProjectionInput::default(),
        }
    }

    /// Create a session pre-filled with `input`
    pub fn with_input(config: CalculatorConfig, input: ProjectionInput) -> Self {
        Self {
            input,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    pub fn set_principal(&mut self, text: impl Into<String>) {
        self.input.principal = text.into();
    }

    pub fn set_rate(&mut self, text: impl Into<String>) {
        self.input.annual_rate_percent = text.into();
    }

    pub fn set_years(&mut self, text: impl Into<String>) {
        self.input.years = text.into();
    }

    /// Flip simple/compound. Recomputes when all fields are filled.
    pub fn set_mode(&mut self, mode: InterestMode) -> Option<Rendering> {
        self.input.mode = mode;
        self.recompute_if_filled()
    }

    /// Flip monthly/annual. Recomputes when all fields are filled.
    pub fn set_granularity(&mut self, granularity: Granularity) -> Option<Rendering> {
        self.input.granularity = granularity;
        self.recompute_if_filled()
    }

    fn recompute_if_filled(&self) -> Option<Rendering> {
        self.input.is_filled().then(|| self.calculate())
    }

    /// Recompute from the stored inputs
    pub fn calculate(&self) -> Rendering {
        match self.engine.project(&self.input) {
            Ok(result) => Rendering::Projected {
                text: result_text(&result, self.config.language),
                chart: result.sample(self.config.sample_points),
                result,
            },
            Err(error) => {
                log::warn!("rejected calculator input: {}", error);
                Rendering::Rejected {
                    message: invalid_input_message(self.config.language).to_string(),
                    error,
                }
            }
        }
    }

    /// Project the stored inputs under every mode and granularity
    pub fn compare_modes(&self) -> Vec<ModeComparison> {
        let combinations = [
            (InterestMode::Simple, Granularity::Annual),
            (InterestMode::Simple, Granularity::Monthly),
            (InterestMode::Compound, Granularity::Annual),
            (InterestMode::Compound, Granularity::Monthly),
        ];

        combinations
            .par_iter()
            .map(|&(mode, granularity)| {
                let input = ProjectionInput {
                    mode,
                    granularity,
                    ..self.input.clone()
                };
                ModeComparison {
                    mode,
                    granularity,
                    outcome: self.engine.project(&input),
                }
            })
            .collect()
    }
}
