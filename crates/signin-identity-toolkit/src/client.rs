use crate::wire::{ErrorEnvelope, SignInWithIdpRequest, SignInWithIdpResponse};

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use signin_config::{AuthServiceConfig, ConfigErrorResult};
use signin_core::{
    AuthService, AuthSession, CredentialToken, Result as SignInResultAlias, SignInError,
};
use url::form_urlencoded;

const SIGN_IN_WITH_IDP_PATH: &str = "/v1/accounts:signInWithIdp";
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// HTTP client for the backend authentication service.
///
/// The current session lives in memory only and is gone with the process.
pub struct IdentityToolkitClient {
    base_url: String,
    api_key: String,
    provider_id: String,
    request_uri: String,
    client: ReqwestClient,
    session: RwLock<Option<AuthSession>>,
}

impl IdentityToolkitClient {
    /// Create a client from configuration. Requires `auth_service.api_key`.
    pub fn from_config(config: &AuthServiceConfig) -> ConfigErrorResult<Self> {
        let api_key = config.require_api_key()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            provider_id: config.provider_id.clone(),
            request_uri: config.request_uri.clone(),
            client: ReqwestClient::new(),
            session: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn sign_in_url(&self) -> String {
        format!("{}{}", self.base_url, SIGN_IN_WITH_IDP_PATH)
    }

    /// `id_token=<token>&providerId=<provider>`, form-encoded.
    fn post_body(&self, token: &CredentialToken) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("id_token", token.expose())
            .append_pair("providerId", &self.provider_id)
            .finish()
    }

    fn store_session(&self, session: Option<AuthSession>) {
        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Turn a non-success response body into an error.
    fn rejection(status: reqwest::StatusCode, body: &str) -> SignInError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                warn!(
                    "signInWithIdp rejected (code {:?}): {}",
                    envelope.error.code, envelope.error.message
                );
                SignInError::auth_service(envelope.error.message)
            }
            Err(_) => {
                warn!("signInWithIdp failed with HTTP {status}");
                SignInError::auth_service(format!("HTTP {status}"))
            }
        }
    }
}

fn transport_error(error: reqwest::Error) -> SignInError {
    SignInError::auth_service(error.without_url().to_string())
}

#[async_trait]
impl AuthService for IdentityToolkitClient {
    async fn exchange_credential(&self, token: &CredentialToken) -> SignInResultAlias<AuthSession> {
        let body = SignInWithIdpRequest {
            post_body: self.post_body(token),
            request_uri: &self.request_uri,
            return_secure_token: true,
            return_idp_credential: true,
        };

        debug!(
            "Exchanging {} credential at {}",
            self.provider_id, self.base_url
        );

        let response = self
            .client
            .post(self.sign_in_url())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(transport_error)?;

        if !status.is_success() {
            return Err(Self::rejection(status, &text));
        }

        let parsed: SignInWithIdpResponse = serde_json::from_str(&text).map_err(|e| {
            SignInError::auth_service(format!("Unexpected signInWithIdp response: {e}"))
        })?;

        let session = AuthSession {
            id: parsed.local_id,
            display_name: parsed.display_name,
            photo_url: parsed.photo_url,
        };
        self.store_session(Some(session.clone()));

        Ok(session)
    }

    fn current_session(&self) -> Option<AuthSession> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn sign_out(&self) -> SignInResultAlias<()> {
        self.store_session(None);
        debug!("Cleared authentication session");
        Ok(())
    }
}
