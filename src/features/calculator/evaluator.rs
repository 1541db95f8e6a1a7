use crate::features::calculator::dto::Calculation;
use crate::features::calculator::error::CalcError;
use crate::features::calculator::executor::{ModuloPolicy, apply};
use crate::features::calculator::operator::Operator;

const VALUE_PARSED: &str = "Value parsed";

/// Splits at the rightmost operator symbol; the first split that parses wins.
pub fn evaluate(expression: &str, policy: ModuloPolicy) -> Result<Calculation, CalcError> {
    let normalized = normalize_glyphs(expression);
    let expr = normalized.trim();

    for op in Operator::SCAN_ORDER {
        if let Some((left, right)) = split_operands(expr, op.symbol()) {
            return apply(op, left, right, policy);
        }
    }

    parse_number(expr)
        .map(|value| Calculation::new(value, VALUE_PARSED))
        .ok_or(CalcError::InvalidFormat)
}

fn normalize_glyphs(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

fn split_operands(expr: &str, symbol: char) -> Option<(f64, f64)> {
    let idx = expr.rfind(symbol)?;
    if idx == 0 || idx + symbol.len_utf8() >= expr.len() {
        return None;
    }

    let left = parse_number(&expr[..idx])?;
    let right = parse_number(&expr[idx + symbol.len_utf8()..])?;
    Some((left, right))
}

// Out-of-range literals such as "1e400" are rejected rather than read as infinity.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() || is_non_finite_literal(text) {
        Some(value)
    } else {
        None
    }
}

fn is_non_finite_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']).to_ascii_lowercase();
    matches!(unsigned.as_str(), "inf" | "infinity" | "nan")
}
