pub mod dto;
pub mod handler;
pub mod helpers;
pub mod service;

pub use dto::{CalculationRequest, CalculationResponse, Operand, ResponseStatus};
pub use handler::{handle_add, handle_calculate};
pub use service::{CalculatorService, Operation};
