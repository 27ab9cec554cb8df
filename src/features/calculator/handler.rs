use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;

use crate::core::error::AppError;
use crate::features::calculator::dto::{CalculationRequest, CalculationResponse};
use crate::server::AppState;

pub async fn handle_calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, AppError> {
    let request = parse_request(&body)?;
    tracing::debug!(?request, "calculate");

    state.calculator.calculate(&request).map(Json)
}

pub async fn handle_add(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, AppError> {
    let request = parse_request(&body)?;
    tracing::debug!(?request, "add");

    state.calculator.add(&request).map(Json)
}

/// Accepts only a non-empty JSON object; anything else counts as no data.
///
/// A literal number too large for `f64` is an invalid operand rather than a
/// missing body.
pub fn parse_request(body: &[u8]) -> Result<CalculationRequest, AppError> {
    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) if !fields.is_empty() => Value::Object(fields),
        Err(err) if is_number_out_of_range(&err) => return Err(AppError::invalid_number()),
        _ => return Err(AppError::no_data()),
    };

    serde_json::from_value(payload)
        .map_err(|err| AppError::internal(format!("failed to read request: {err}")))
}

// serde_json exposes no dedicated category for this; it is a syntax error
// whose message names the overflow.
fn is_number_out_of_range(err: &serde_json::Error) -> bool {
    err.is_syntax() && err.to_string().starts_with("number out of range")
}
