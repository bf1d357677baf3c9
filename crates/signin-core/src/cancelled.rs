use thiserror::Error;

/// The enclosing task was cancelled while a sign-in call was outstanding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sign-in operation cancelled")]
pub struct Cancelled;
