use crate::{
    AuthServiceConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ProviderConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub auth_service: AuthServiceConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SIGNIN_CONFIG_DIR env var, else use ./.signin/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SIGNIN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SIGNIN_CONFIG_DIR env var > ./.signin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.provider.validate()?;
        self.auth_service.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  provider: client_id={}, id_token={}, authorized_only={}, auto_select={}",
            if self.provider.server_client_id.is_empty() {
                "<unset>"
            } else {
                self.provider.server_client_id.as_str()
            },
            self.provider.request_id_token,
            self.provider.filter_by_authorized_accounts,
            self.provider.auto_select
        );
        info!(
            "  auth_service: {} (provider {}, api key {})",
            self.auth_service.base_url,
            self.auth_service.provider_id,
            if self.auth_service.api_key.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  logging: {} ({})",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Provider
        Self::apply_env_string(
            "SIGNIN_SERVER_CLIENT_ID",
            &mut self.provider.server_client_id,
        );
        Self::apply_env_bool(
            "SIGNIN_REQUEST_ID_TOKEN",
            &mut self.provider.request_id_token,
        );
        Self::apply_env_bool(
            "SIGNIN_FILTER_BY_AUTHORIZED_ACCOUNTS",
            &mut self.provider.filter_by_authorized_accounts,
        );
        Self::apply_env_bool("SIGNIN_AUTO_SELECT", &mut self.provider.auto_select);

        // Auth service
        Self::apply_env_string("SIGNIN_AUTH_BASE_URL", &mut self.auth_service.base_url);
        Self::apply_env_option_string("SIGNIN_AUTH_API_KEY", &mut self.auth_service.api_key);
        Self::apply_env_string(
            "SIGNIN_AUTH_PROVIDER_ID",
            &mut self.auth_service.provider_id,
        );
        Self::apply_env_string(
            "SIGNIN_AUTH_REQUEST_URI",
            &mut self.auth_service.request_uri,
        );

        // Logging
        Self::apply_env_parse("SIGNIN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SIGNIN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SIGNIN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
