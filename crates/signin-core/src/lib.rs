pub mod auth_service;
pub mod auth_session;
pub mod begin_sign_in_request;
pub mod cancellation_signal;
pub mod cancelled;
pub mod credential_provider;
pub mod credential_token;
pub mod error;
pub mod logger;
pub mod sign_in_gateway;
pub mod sign_in_handle;
pub mod sign_in_outcome;
pub mod sign_in_payload;
pub mod sign_in_result;
pub mod sign_in_state;
pub mod sign_in_state_holder;
pub mod user_identity;

pub use auth_service::AuthService;
pub use auth_session::AuthSession;
pub use begin_sign_in_request::BeginSignInRequest;
pub use cancellation_signal::CancellationSignal;
pub use cancelled::Cancelled;
pub use credential_provider::CredentialProvider;
pub use credential_token::CredentialToken;
pub use error::{LoggerError, Result, SignInError};
pub use sign_in_gateway::SignInGateway;
pub use sign_in_handle::SignInHandle;
pub use sign_in_outcome::SignInOutcome;
pub use sign_in_payload::SignInPayload;
pub use sign_in_result::SignInResult;
pub use sign_in_state::SignInState;
pub use sign_in_state_holder::SignInStateHolder;
pub use user_identity::UserIdentity;

/// Payload field carrying the provider's identity token.
pub const ID_TOKEN_FIELD: &str = "idToken";

#[cfg(test)]
mod tests;
