use std::sync::Arc;

use crate::features::calculator::CalculatorService;

#[derive(Clone, Default)]
pub struct AppState {
    pub calculator: Arc<CalculatorService>,
}

impl AppState {
    pub fn new(calculator: CalculatorService) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}
