use serde_json::Value;

use crate::core::error::AppError;
use crate::features::calculator::dto::{CalculationRequest, CalculationResponse};
use crate::features::calculator::helpers::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(AppError::UnsupportedOperation),
        }
    }

    /// Accepts only JSON strings; any other value is an unsupported operation.
    pub fn from_value(value: Option<&Value>) -> Result<Self, AppError> {
        match value {
            Some(Value::String(name)) => Self::parse(name),
            _ => Err(AppError::UnsupportedOperation),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, AppError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(AppError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

/// Stateless arithmetic behind the HTTP routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResponse, AppError> {
        let num1 = request.num1.coerce("num1")?;
        let num2 = request.num2.coerce("num2")?;
        let operation = Operation::from_value(request.operation.as_ref())?;

        let result = operation.apply(num1, num2)?;
        let message = format!(
            "{} {} {} = {}",
            format_number(num1),
            operation.symbol(),
            format_number(num2),
            format_number(result)
        );

        Ok(CalculationResponse::success(result, message))
    }

    pub fn add(&self, request: &CalculationRequest) -> Result<CalculationResponse, AppError> {
        let num1 = request.num1.coerce("num1")?;
        let num2 = request.num2.coerce("num2")?;

        let message = format!(
            "Added {} and {}",
            format_number(num1),
            format_number(num2)
        );

        Ok(CalculationResponse::success(num1 + num2, message))
    }
}
