use crate::UserIdentity;

use serde::{Deserialize, Serialize};

/// Outcome of a sign-in attempt, as forwarded to the state holder.
///
/// Identity presence is the only success discriminant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInOutcome {
    pub identity: Option<UserIdentity>,
    pub error_message: Option<String>,
}

impl SignInOutcome {
    pub fn success(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            identity: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.identity.is_some()
    }
}
