use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_BASE_URL, DEFAULT_AUTH_PROVIDER_ID,
    DEFAULT_AUTH_REQUEST_URI,
};

use serde::Deserialize;

/// Settings for the backend authentication service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthServiceConfig {
    pub base_url: String,
    /// Project API key. Secret: never logged.
    pub api_key: Option<String>,
    /// Identity provider the credential token belongs to
    pub provider_id: String,
    pub request_uri: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_AUTH_BASE_URL),
            api_key: None,
            provider_id: String::from(DEFAULT_AUTH_PROVIDER_ID),
            request_uri: String::from(DEFAULT_AUTH_REQUEST_URI),
        }
    }
}

impl AuthServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::auth_service(format!(
                "auth_service.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.provider_id.trim().is_empty() {
            return Err(ConfigError::auth_service(
                "auth_service.provider_id cannot be empty",
            ));
        }

        if let Some(ref key) = self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::auth_service(
                "auth_service.api_key cannot be empty when provided",
            ));
        }

        Ok(())
    }

    /// API key, or an error naming the missing setting.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::auth_service("auth_service.api_key is not set"))
    }
}
