//! Mediates the two external exchanges of a sign-in.
//!
//! Operational failures from either collaborator are logged and folded into
//! the return value. Cancellation is never folded: it always reaches the
//! caller, either as `Err(Cancelled)` or `SignInResult::Cancelled`.

use crate::{
    AuthService, AuthSession, BeginSignInRequest, CancellationSignal, Cancelled,
    CredentialProvider, Result as SignInResultAlias, SignInError, SignInHandle, SignInPayload,
    SignInResult, UserIdentity,
};

use std::sync::Arc;

use log::{debug, info, warn};
use signin_config::ProviderConfig;

#[derive(Clone)]
pub struct SignInGateway {
    provider: Arc<dyn CredentialProvider>,
    auth: Arc<dyn AuthService>,
    request: BeginSignInRequest,
    cancellation: Option<CancellationSignal>,
}

impl SignInGateway {
    pub fn new(
        provider: Arc<dyn CredentialProvider>,
        auth: Arc<dyn AuthService>,
        request: BeginSignInRequest,
    ) -> Self {
        Self {
            provider,
            auth,
            request,
            cancellation: None,
        }
    }

    /// Build a gateway whose challenge request comes from configuration.
    pub fn from_config(
        provider: Arc<dyn CredentialProvider>,
        auth: Arc<dyn AuthService>,
        config: &ProviderConfig,
    ) -> Self {
        Self::new(provider, auth, BeginSignInRequest::from(config))
    }

    /// Abandon outstanding external calls when `signal` fires.
    pub fn with_cancellation(mut self, signal: CancellationSignal) -> Self {
        self.cancellation = Some(signal);
        self
    }

    pub fn request(&self) -> &BeginSignInRequest {
        &self.request
    }

    /// Request a sign-in challenge from the credential provider.
    ///
    /// Returns `Ok(None)` when the provider fails for an operational reason.
    pub async fn begin_sign_in(&self) -> Result<Option<SignInHandle>, Cancelled> {
        debug!(
            "Requesting sign-in challenge (authorized_only={}, auto_select={})",
            self.request.filter_by_authorized_accounts, self.request.auto_select
        );

        match self
            .guarded(self.provider.begin_challenge(&self.request))
            .await
        {
            Ok(handle) => {
                debug!("Sign-in challenge issued");
                Ok(Some(handle))
            }
            Err(e) => {
                Self::absorb("begin_sign_in", e)?;
                Ok(None)
            }
        }
    }

    /// Exchange the provider's result payload for a backend session.
    pub async fn complete_sign_in(&self, payload: &SignInPayload) -> SignInResult {
        match self.exchange(payload).await {
            Ok(session) => {
                info!("Signed in as {}", session.id);
                SignInResult::Success(UserIdentity::from(&session))
            }
            Err(e) => match Self::absorb("complete_sign_in", e) {
                Ok(e) => SignInResult::Failure(e.message().to_string()),
                Err(Cancelled) => SignInResult::Cancelled,
            },
        }
    }

    /// Sign out of the credential provider, then the authentication service.
    ///
    /// Failures are logged, not returned. A provider failure skips the
    /// backend sign-out.
    pub async fn sign_out(&self) -> Result<(), Cancelled> {
        match self.sign_out_both().await {
            Ok(()) => info!("Signed out"),
            Err(e) => {
                Self::absorb("sign_out", e)?;
            }
        }
        Ok(())
    }

    /// Identity of the session the authentication service currently holds.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.auth.current_session().as_ref().map(UserIdentity::from)
    }

    async fn exchange(&self, payload: &SignInPayload) -> SignInResultAlias<AuthSession> {
        let token = self.provider.extract_credential(payload)?;
        self.guarded(self.auth.exchange_credential(&token)).await
    }

    async fn sign_out_both(&self) -> SignInResultAlias<()> {
        self.guarded(self.provider.sign_out()).await?;
        self.guarded(self.auth.sign_out()).await
    }

    /// Race an external call against the attached cancellation signal.
    async fn guarded<T>(
        &self,
        call: impl Future<Output = SignInResultAlias<T>>,
    ) -> SignInResultAlias<T> {
        let Some(signal) = &self.cancellation else {
            return call.await;
        };

        if signal.is_cancelled() {
            return Err(SignInError::cancelled());
        }

        tokio::select! {
            biased;
            _ = signal.cancelled() => Err(SignInError::cancelled()),
            result = call => result,
        }
    }

    /// Log an operational failure and hand it back, or surface cancellation.
    fn absorb(operation: &str, error: SignInError) -> Result<SignInError, Cancelled> {
        if error.is_cancelled() {
            info!("{operation} cancelled");
            return Err(Cancelled);
        }

        warn!("{operation} failed: {error}");
        Ok(error)
    }
}
