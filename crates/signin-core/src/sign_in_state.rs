use crate::SignInOutcome;

use serde::Serialize;

/// Latest sign-in state observed by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInState {
    pub is_sign_in_successful: bool,
    pub sign_in_error: Option<String>,
}

impl From<&SignInOutcome> for SignInState {
    /// A present identity means success; any stray error message is dropped.
    fn from(outcome: &SignInOutcome) -> Self {
        match outcome.identity {
            Some(_) => Self {
                is_sign_in_successful: true,
                sign_in_error: None,
            },
            None => Self {
                is_sign_in_successful: false,
                sign_in_error: outcome.error_message.clone(),
            },
        }
    }
}
