use crate::{SignInOutcome, UserIdentity};

/// Result of completing a sign-in.
///
/// `Cancelled` is kept apart from `Failure` so a torn-down task never
/// surfaces as a sign-in error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInResult {
    Success(UserIdentity),
    Failure(String),
    Cancelled,
}

impl SignInResult {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Success(identity) => Some(identity),
            _ => None,
        }
    }

    /// Outcome to record, or None when the attempt was cancelled.
    pub fn into_outcome(self) -> Option<SignInOutcome> {
        match self {
            Self::Success(identity) => Some(SignInOutcome::success(identity)),
            Self::Failure(message) => Some(SignInOutcome::failure(message)),
            Self::Cancelled => None,
        }
    }
}
