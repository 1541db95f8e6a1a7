pub mod dto;
pub mod handler;

pub use dto::{BannerDto, HealthDto};
pub use handler::{handle_banner, handle_healthcheck};
