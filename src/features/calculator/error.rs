use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid expression format")]
    InvalidFormat,
    #[error("cannot divide by zero")]
    DivideByZero,
    #[error("cannot perform modulo with zero")]
    ModuloByZero,
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}
