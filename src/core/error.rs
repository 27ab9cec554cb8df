use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::response::ResponseStatus;

pub const NO_DATA_PROVIDED: &str = "No data provided";
pub const INVALID_NUMBER_FORMAT: &str = "Invalid number format";

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Invalid operation. Use: add, subtract, multiply, or divide")]
    UnsupportedOperation,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_data() -> Self {
        Self::invalid_input(NO_DATA_PROVIDED)
    }

    pub fn invalid_number() -> Self {
        Self::invalid_input(INVALID_NUMBER_FORMAT)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    status: ResponseStatus,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal faults are reported as client errors too, so callers can
        // always parse a JSON body.
        let status = StatusCode::BAD_REQUEST;

        tracing::warn!(%status, error = %self, "request rejected");

        let body = Json(ErrorResponse {
            error: self.to_string(),
            status: ResponseStatus::Error,
        });

        (status, body).into_response()
    }
}
