//! AWS Lambda handler for strategy listings and recommendations
//!
//! Served through a Lambda Function URL:
//!   GET  /strategies      -> {"success": true, "strategies": [...]}
//!   POST /recommendation  -> {"success": true, "strategy": {...}, "projection": {...}}
//! Failures return {"success": false, "error": "...", "kind": "..."}.
//! ADVISOR_MAX_YEARS overrides the projection horizon cap.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use investment_advisor::{
    projection::DEFAULT_MAX_YEARS, Advisor, AdvisorError, ProjectionConfig, RecommendationRequest,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

/// Response shape understood by Lambda Function URLs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FunctionUrlResponse {
    status_code: u16,
    headers: HashMap<&'static str, &'static str>,
    body: String,
}

#[derive(Debug, Serialize)]
struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    success: bool,
    error: &'a str,
    kind: &'a str,
}

#[derive(Debug, Serialize)]
struct StrategyList<T: Serialize> {
    strategies: T,
}

fn cors_headers() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ])
}

fn respond(status_code: u16, body: String) -> FunctionUrlResponse {
    FunctionUrlResponse {
        status_code,
        headers: cors_headers(),
        body,
    }
}

fn error_response(status_code: u16, kind: &str, message: &str) -> FunctionUrlResponse {
    let body = serde_json::to_string(&Failure {
        success: false,
        error: message,
        kind,
    })
    .unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    respond(status_code, body)
}

fn json_response<T: Serialize>(body: T) -> FunctionUrlResponse {
    match serde_json::to_string(&Success { success: true, body }) {
        Ok(text) => respond(200, text),
        Err(e) => error_response(500, "serialization", &e.to_string()),
    }
}

fn advisor_error_response(err: &AdvisorError) -> FunctionUrlResponse {
    let status = match err {
        AdvisorError::InvalidInput { .. } => 400,
        AdvisorError::Overflow { .. } => 422,
        AdvisorError::Io(_) | AdvisorError::Csv(_) => 500,
    };
    error_response(status, err.kind(), &err.to_string())
}

fn max_years_from_env() -> u32 {
    env::var("ADVISOR_MAX_YEARS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_YEARS)
}

/// Dispatch a request by method and path
fn route(advisor: &Advisor, method: &str, path: &str, body: Option<&str>) -> FunctionUrlResponse {
    let path = path.trim_end_matches('/');

    match (method, path) {
        ("OPTIONS", _) => respond(200, String::new()),

        ("GET", "/strategies") => json_response(StrategyList {
            strategies: advisor.list_strategies(),
        }),

        ("POST", "/recommendation") => {
            let body = body.filter(|b| !b.trim().is_empty()).unwrap_or("{}");
            let request: RecommendationRequest = match serde_json::from_str(body) {
                Ok(r) => r,
                Err(e) => {
                    return error_response(400, "invalid_input", &format!("Invalid JSON: {}", e));
                }
            };

            match advisor.recommend(&request) {
                Ok(rec) => json_response(rec),
                Err(e) => {
                    log::info!("rejected recommendation request: {}", e);
                    advisor_error_response(&e)
                }
            }
        }

        _ => error_response(404, "not_found", &format!("no route for {} {}", method, path)),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<FunctionUrlResponse, Error> {
    let request = event.payload;
    let method = request
        .request_context
        .http
        .method
        .as_deref()
        .unwrap_or("GET")
        .to_uppercase();
    let path = request.raw_path.as_deref().unwrap_or("/");

    if request.is_base64_encoded {
        return Ok(error_response(400, "invalid_input", "binary request bodies are not supported"));
    }

    let advisor = Advisor::new(ProjectionConfig {
        max_years: max_years_from_env(),
        ..Default::default()
    });

    Ok(route(&advisor, &method, path, request.body.as_deref()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
