mod cancellation;
mod payload;

use crate::{
    AuthService, AuthSession, BeginSignInRequest, CredentialProvider, CredentialToken,
    Result as SignInResultAlias, SignInError, SignInHandle,
};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Scripted behaviour for one collaborator call.
#[derive(Debug, Clone)]
pub(crate) enum Step {
    Succeed,
    Fail(&'static str),
    Cancel,
    /// Never resolves; only a cancellation signal can end the call.
    Hang,
}

impl Step {
    async fn run<T>(
        &self,
        value: impl FnOnce() -> T,
        fail: fn(&'static str) -> SignInError,
    ) -> SignInResultAlias<T> {
        match self {
            Step::Succeed => Ok(value()),
            Step::Fail(message) => Err(fail(*message)),
            Step::Cancel => Err(SignInError::cancelled()),
            Step::Hang => std::future::pending().await,
        }
    }
}

fn provider_error(message: &'static str) -> SignInError {
    SignInError::provider(message)
}

fn auth_service_error(message: &'static str) -> SignInError {
    SignInError::auth_service(message)
}

pub(crate) struct FakeProvider {
    pub begin: Step,
    pub sign_out: Step,
    pub handle: &'static str,
    pub begin_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub last_request: Mutex<Option<BeginSignInRequest>>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self {
            begin: Step::Succeed,
            sign_out: Step::Succeed,
            handle: "intent-sender-1",
            begin_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub(crate) fn with_begin(mut self, step: Step) -> Self {
        self.begin = step;
        self
    }

    pub(crate) fn with_sign_out(mut self, step: Step) -> Self {
        self.sign_out = step;
        self
    }
}

#[async_trait]
impl CredentialProvider for FakeProvider {
    async fn begin_challenge(
        &self,
        request: &BeginSignInRequest,
    ) -> SignInResultAlias<SignInHandle> {
        self.begin_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.begin
            .run(|| SignInHandle::new(self.handle), provider_error)
            .await
    }

    async fn sign_out(&self) -> SignInResultAlias<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out.run(|| (), provider_error).await
    }
}

pub(crate) struct FakeAuthService {
    pub exchange: Step,
    pub sign_out: Step,
    pub session: AuthSession,
    pub current: Mutex<Option<AuthSession>>,
    pub exchanged_tokens: Mutex<Vec<String>>,
    pub sign_out_calls: AtomicUsize,
}

impl FakeAuthService {
    pub(crate) fn new(session: AuthSession) -> Self {
        Self {
            exchange: Step::Succeed,
            sign_out: Step::Succeed,
            session,
            current: Mutex::new(None),
            exchanged_tokens: Mutex::new(Vec::new()),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_exchange(mut self, step: Step) -> Self {
        self.exchange = step;
        self
    }

    pub(crate) fn with_sign_out(mut self, step: Step) -> Self {
        self.sign_out = step;
        self
    }

    pub(crate) fn signed_in(self) -> Self {
        *self.current.lock().unwrap() = Some(self.session.clone());
        self
    }
}

#[async_trait]
impl AuthService for FakeAuthService {
    async fn exchange_credential(&self, token: &CredentialToken) -> SignInResultAlias<AuthSession> {
        self.exchanged_tokens
            .lock()
            .unwrap()
            .push(token.expose().to_string());
        let session = self
            .exchange
            .run(|| self.session.clone(), auth_service_error)
            .await?;
        *self.current.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    fn current_session(&self) -> Option<AuthSession> {
        self.current.lock().unwrap().clone()
    }

    async fn sign_out(&self) -> SignInResultAlias<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out.run(|| (), auth_service_error).await?;
        *self.current.lock().unwrap() = None;
        Ok(())
    }
}

/// Session `{id: "u1", displayName: "Ann", photoUrl: null}`.
pub(crate) fn ann_session() -> AuthSession {
    AuthSession::new("u1").with_display_name("Ann")
}
