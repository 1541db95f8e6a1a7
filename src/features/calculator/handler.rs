use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Map, Value};

use crate::core::error::AppError;
use crate::features::calculator::dto::{CalculationRequestDto, CalculationResponseDto};
use crate::server::AppState;

pub async fn handle_calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponseDto>, AppError> {
    let request = decode_request(&body).map_err(|err| {
        tracing::debug!(error = %err, "rejecting malformed calculation request");
        AppError::MalformedRequest
    })?;

    match state.calculator.calculate(request) {
        Ok(response) => {
            tracing::debug!(
                expression = %response.expression,
                result = response.result,
                "calculation completed"
            );
            Ok(Json(response))
        }
        Err(err) => {
            tracing::debug!(error = %err, "calculation failed");
            Err(err.into())
        }
    }
}

pub async fn handle_calculate_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn decode_request(body: &[u8]) -> Result<CalculationRequestDto, serde_json::Error> {
    let payload = match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Value::Object(fold_field_names(fields)),
        other => other,
    };
    serde_json::from_value(payload)
}

// Field names match case-insensitively; an exactly-cased key beats its variants.
fn fold_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();

    for (key, value) in fields {
        let lower = key.to_ascii_lowercase();
        if lower == key {
            folded.insert(lower, value);
        } else {
            folded.entry(lower).or_insert(value);
        }
    }

    folded
}
