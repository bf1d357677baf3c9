use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTO_SELECT, DEFAULT_FILTER_BY_AUTHORIZED_ACCOUNTS,
    DEFAULT_REQUEST_ID_TOKEN,
};

use serde::Deserialize;

/// Settings for the sign-in challenge sent to the credential provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// OAuth client id of the backend the identity token is minted for
    pub server_client_id: String,
    pub request_id_token: bool,
    /// Only offer accounts that already authorized this app
    pub filter_by_authorized_accounts: bool,
    /// Sign in without a prompt when exactly one account qualifies
    pub auto_select: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            server_client_id: String::new(),
            request_id_token: DEFAULT_REQUEST_ID_TOKEN,
            filter_by_authorized_accounts: DEFAULT_FILTER_BY_AUTHORIZED_ACCOUNTS,
            auto_select: DEFAULT_AUTO_SELECT,
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.server_client_id.trim().is_empty() {
            return Err(ConfigError::provider(
                "provider.server_client_id must be set (SIGNIN_SERVER_CLIENT_ID)",
            ));
        }

        if !self.request_id_token {
            return Err(ConfigError::provider(
                "provider.request_id_token must be true: the backend exchange needs an identity token",
            ));
        }

        Ok(())
    }
}
