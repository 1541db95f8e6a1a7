use axum::Json;

use crate::features::status::dto::{BannerDto, HealthDto};

const API_VERSION: &str = "2.0";
const SERVICE_NAME: &str = "calculator-api";

pub async fn handle_banner() -> Json<BannerDto> {
    Json(BannerDto {
        message: "Advanced Calculator API - Ready to compute!".to_string(),
        version: API_VERSION.to_string(),
        endpoints: "/calculate (POST), /health (GET)".to_string(),
    })
}

pub async fn handle_healthcheck() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
