mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;
const MIN_JWT_SECRET_BYTES: usize = 32;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
