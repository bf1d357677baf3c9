use serde::{Deserialize, Serialize};

/// Body of `accounts:signInWithIdp`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInWithIdpRequest<'a> {
    /// Form-encoded `id_token=...&providerId=...`.
    pub post_body: String,
    pub request_uri: &'a str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInWithIdpResponse {
    pub local_id: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// `{"error": {"code": 400, "message": "INVALID_IDP_RESPONSE"}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub code: Option<u16>,
    pub message: String,
}
