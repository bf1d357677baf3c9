use crate::{
    BeginSignInRequest, CredentialToken, Result as SignInResultAlias, SignInHandle, SignInPayload,
};

use async_trait::async_trait;

/// Capability surface of the external credential provider.
///
/// Implementations report task cancellation as `SignInError::Cancelled` and
/// every other failure as an operational variant.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Request a sign-in challenge. The returned handle launches the provider UI.
    async fn begin_challenge(&self, request: &BeginSignInRequest)
    -> SignInResultAlias<SignInHandle>;

    /// Pull the credential token out of the provider's result payload.
    fn extract_credential(&self, payload: &SignInPayload) -> SignInResultAlias<CredentialToken> {
        payload.credential_token()
    }

    async fn sign_out(&self) -> SignInResultAlias<()>;
}
