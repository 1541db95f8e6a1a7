use std::net::IpAddr;

use crate::features::calculator::ModuloPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub modulo_policy: ModuloPolicy,
}
