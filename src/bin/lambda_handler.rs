//! AWS Lambda handler for interest projections
//!
//! Accepts the calculator inputs as JSON and returns the result text with the
//! chart-ready sampled series. Supports Lambda Function URLs for direct HTTP
//! access.

use interest_projection::{
    calculator::{Calculator, CalculatorConfig, Rendering},
    input::{Field, Granularity, InterestMode, ProjectionInput},
    projection::ProjectionSummary,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for one projection, fields as typed by the user
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub principal: String,

    /// Annual rate in percent
    #[serde(default)]
    pub rate: String,

    #[serde(default)]
    pub years: String,

    #[serde(default)]
    pub compound: bool,

    #[serde(default)]
    pub monthly: bool,

    /// Session settings: `sample_points` (default: 7), `language`
    /// (default: es) and `projection.max_periods` (default: 12000)
    #[serde(flatten)]
    pub config: CalculatorConfig,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub text: String,
    #[serde(flatten)]
    pub summary: ProjectionSummary,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub detail: String,
}

/// Run the projection; returns the HTTP status and JSON body
fn evaluate(request: ProjectionRequest) -> Result<(u16, String), serde_json::Error> {
    let start = std::time::Instant::now();

    let input = ProjectionInput::new(
        request.principal,
        request.rate,
        request.years,
        InterestMode::from_compounding(request.compound),
        Granularity::from_monthly(request.monthly),
    );

    match Calculator::with_input(request.config, input).calculate() {
        Rendering::Projected { text, chart, result } => {
            let response = ProjectionResponse {
                text,
                summary: result.summary(),
                labels: chart.labels,
                values: chart.values,
                execution_time_us: start.elapsed().as_micros() as u64,
            };
            Ok((200, serde_json::to_string(&response)?))
        }
        Rendering::Rejected { message, error } => {
            let response = ErrorResponse {
                error: message,
                field: error.field(),
                detail: error.to_string(),
            };
            Ok((422, serde_json::to_string(&response)?))
        }
    }
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("invalid request body: {}", e);
            return json_response(400, error_body(&format!("Invalid JSON: {}", e)));
        }
    };

    let (status, body) = evaluate(request)?;
    json_response(status, body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
