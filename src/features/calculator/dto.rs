use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub value: f64,
    pub description: &'static str,
}

impl Calculation {
    pub fn new(value: f64, description: &'static str) -> Self {
        Self { value, description }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CalculationRequestDto {
    pub expression: Option<String>,
    pub num1: Option<f64>,
    pub num2: Option<f64>,
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponseDto {
    pub result: f64,
    pub expression: String,
    pub description: String,
    pub success: bool,
}

impl CalculationResponseDto {
    pub fn from_calculation(expression: String, calculation: Calculation) -> Self {
        Self {
            result: calculation.value,
            expression,
            description: calculation.description.to_string(),
            success: true,
        }
    }
}
