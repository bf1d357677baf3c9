use signin_config::ProviderConfig;

use serde::Serialize;

/// Challenge configuration sent to the credential provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginSignInRequest {
    pub id_token_requested: bool,
    pub filter_by_authorized_accounts: bool,
    pub server_client_id: String,
    pub auto_select: bool,
}

impl BeginSignInRequest {
    /// Token-based identity for any account on the device, auto-selecting a sole match.
    pub fn new(server_client_id: impl Into<String>) -> Self {
        Self {
            id_token_requested: true,
            filter_by_authorized_accounts: false,
            server_client_id: server_client_id.into(),
            auto_select: true,
        }
    }
}

impl From<&ProviderConfig> for BeginSignInRequest {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            id_token_requested: config.request_id_token,
            filter_by_authorized_accounts: config.filter_by_authorized_accounts,
            server_client_id: config.server_client_id.clone(),
            auto_select: config.auto_select,
        }
    }
}
