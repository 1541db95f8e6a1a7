use std::fmt;
use std::str::FromStr;

use crate::features::calculator::dto::Calculation;
use crate::features::calculator::error::CalcError;
use crate::features::calculator::operator::Operator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuloPolicy {
    #[default]
    Reject,
    Nan,
}

impl FromStr for ModuloPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "nan" => Ok(Self::Nan),
            other => Err(format!("expected `reject` or `nan`, got `{other}`")),
        }
    }
}

impl fmt::Display for ModuloPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Nan => f.write_str("nan"),
        }
    }
}

pub fn execute(
    left: f64,
    right: f64,
    token: &str,
    policy: ModuloPolicy,
) -> Result<Calculation, CalcError> {
    let op = Operator::from_token(token)
        .ok_or_else(|| CalcError::UnsupportedOperation(token.to_string()))?;
    apply(op, left, right, policy)
}

pub fn apply(
    op: Operator,
    left: f64,
    right: f64,
    policy: ModuloPolicy,
) -> Result<Calculation, CalcError> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            left / right
        }
        Operator::Modulo => {
            if right == 0.0 && policy == ModuloPolicy::Reject {
                return Err(CalcError::ModuloByZero);
            }
            // Rust's `%` on floats truncates, so the sign follows the dividend.
            left % right
        }
        Operator::Power => left.powf(right),
    };

    Ok(Calculation::new(value, op.description()))
}
