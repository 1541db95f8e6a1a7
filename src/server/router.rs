use axum::Router;
use axum::middleware;
use axum::routing::{any, post};

use crate::features::calculator::{handle_calculate, handle_calculate_method_not_allowed};
use crate::features::status::{handle_banner, handle_healthcheck};
use crate::server::{AppState, apply_cors};

pub fn build_router(state: AppState) -> Router {
    // Unmatched paths fall through to the banner, and neither status route checks the method.
    Router::new()
        .route("/", any(handle_banner))
        .route("/health", any(handle_healthcheck))
        .route(
            "/calculate",
            post(handle_calculate).fallback(handle_calculate_method_not_allowed),
        )
        .fallback(handle_banner)
        .layer(middleware::from_fn(apply_cors))
        .with_state(state)
}
