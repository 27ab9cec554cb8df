use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::AppError;
pub use crate::core::response::ResponseStatus;

/// Body accepted by `/calculate` and `/add`.
///
/// Every field is optional; absent operands count as zero and an absent
/// operation is rejected by the dispatcher rather than by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub num1: Operand,
    #[serde(default)]
    pub num2: Operand,
    #[serde(default)]
    pub operation: Option<Value>,
}

/// A raw operand as it appeared in the request body, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    #[default]
    #[serde(skip)]
    Missing,
    Number(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

impl Operand {
    pub fn coerce(&self, field: &str) -> Result<f64, AppError> {
        match self {
            Self::Missing => Ok(0.0),
            Self::Number(value) => Ok(*value),
            Self::Flag(value) => Ok(if *value { 1.0 } else { 0.0 }),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::invalid_number()),
            Self::Other(value) => Err(AppError::internal(format!(
                "{field} must be a number or a numeric string, not {}",
                json_type_name(value)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub result: f64,
    pub status: ResponseStatus,
    pub message: String,
}

impl CalculationResponse {
    pub fn success(result: f64, message: String) -> Self {
        Self {
            result,
            status: ResponseStatus::Success,
            message,
        }
    }
}
