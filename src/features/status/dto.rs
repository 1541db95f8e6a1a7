use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BannerDto {
    pub message: String,
    pub version: String,
    pub endpoints: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
}
