pub mod config;
pub mod repositories;

pub use config::{AppConfig, ConfigError, ServerConfig};
pub use repositories::{InMemoryExchangeRepository, JsonExchangeRepository};
