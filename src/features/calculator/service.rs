use crate::features::calculator::dto::{
    Calculation, CalculationRequestDto, CalculationResponseDto,
};
use crate::features::calculator::error::CalcError;
use crate::features::calculator::evaluator::evaluate;
use crate::features::calculator::executor::{ModuloPolicy, execute};

pub struct CalculatorService {
    modulo_policy: ModuloPolicy,
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new(ModuloPolicy::default())
    }
}

impl CalculatorService {
    pub fn new(modulo_policy: ModuloPolicy) -> Self {
        Self { modulo_policy }
    }

    pub fn evaluate(&self, expression: &str) -> Result<Calculation, CalcError> {
        evaluate(expression, self.modulo_policy)
    }

    pub fn execute(&self, left: f64, right: f64, operation: &str) -> Result<Calculation, CalcError> {
        execute(left, right, operation, self.modulo_policy)
    }

    // A non-empty expression takes priority over the operand triple.
    pub fn calculate(
        &self,
        request: CalculationRequestDto,
    ) -> Result<CalculationResponseDto, CalcError> {
        if let Some(expression) = request.expression.filter(|expr| !expr.is_empty()) {
            let calculation = self.evaluate(&expression)?;
            return Ok(CalculationResponseDto::from_calculation(
                expression,
                calculation,
            ));
        }

        let num1 = request.num1.unwrap_or_default();
        let num2 = request.num2.unwrap_or_default();
        let operation = request.operation.unwrap_or_default();

        let calculation = self.execute(num1, num2, &operation)?;
        let expression = format!("{num1:.2} {operation} {num2:.2}");
        Ok(CalculationResponseDto::from_calculation(
            expression,
            calculation,
        ))
    }
}
