use crate::{AuthSession, CredentialToken, Result as SignInResultAlias};

use async_trait::async_trait;

/// Capability surface of the external backend authentication service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange a provider credential for an authenticated session.
    async fn exchange_credential(&self, token: &CredentialToken)
    -> SignInResultAlias<AuthSession>;

    /// Currently authenticated session, if any. Never touches the network.
    fn current_session(&self) -> Option<AuthSession>;

    async fn sign_out(&self) -> SignInResultAlias<()>;
}
