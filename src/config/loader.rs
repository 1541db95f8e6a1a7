use std::env;
use std::net::IpAddr;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;
use crate::features::calculator::ModuloPolicy;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    load_config_from(|key| env::var(key).ok())
}

pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("CALCULATOR_PORT").or_else(|| lookup("PORT")) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?,
        None => DEFAULT_PORT,
    };

    let host = lookup("CALCULATOR_HOST")
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
        .trim()
        .parse::<IpAddr>()
        .map_err(|err| AppError::configuration(format!("invalid CALCULATOR_HOST: {err}")))?;

    let modulo_policy = match lookup("CALCULATOR_MODULO_BY_ZERO") {
        Some(value) => value.parse::<ModuloPolicy>().map_err(|err| {
            AppError::configuration(format!("invalid CALCULATOR_MODULO_BY_ZERO: {err}"))
        })?,
        None => ModuloPolicy::default(),
    };

    Ok(AppConfig {
        host,
        port,
        modulo_policy,
    })
}
