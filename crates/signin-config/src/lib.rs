mod auth_service_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;

pub use auth_service_config::AuthServiceConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;

const CONFIG_DIR_ENV: &str = "SIGNIN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".signin";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_REQUEST_ID_TOKEN: bool = true;
const DEFAULT_FILTER_BY_AUTHORIZED_ACCOUNTS: bool = false;
const DEFAULT_AUTO_SELECT: bool = true;

const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_AUTH_PROVIDER_ID: &str = "google.com";
const DEFAULT_AUTH_REQUEST_URI: &str = "http://localhost";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
