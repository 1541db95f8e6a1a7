pub mod dto;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod handler;
pub mod operator;
pub mod service;

pub use dto::{Calculation, CalculationRequestDto, CalculationResponseDto};
pub use error::CalcError;
pub use evaluator::evaluate;
pub use executor::{ModuloPolicy, apply, execute};
pub use handler::{handle_calculate, handle_calculate_method_not_allowed};
pub use operator::Operator;
pub use service::CalculatorService;
