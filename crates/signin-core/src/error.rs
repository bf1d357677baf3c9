use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the credential provider or the authentication service.
///
/// `Cancelled` is the only variant that is not an operational failure: it
/// means the enclosing task is being torn down and must reach the caller.
#[derive(Error, Debug)]
pub enum SignInError {
    #[error("Sign-in cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Credential provider error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication service error: {message} {location}")]
    AuthService {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed sign-in payload: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("No credential token in sign-in payload {location}")]
    MissingCredential { location: ErrorLocation },
}

impl SignInError {
    /// Whether this error signals task cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Bare failure description, suitable for direct display.
    pub fn message(&self) -> &str {
        match self {
            Self::Cancelled { .. } => "Sign-in cancelled",
            Self::Provider { message, .. }
            | Self::AuthService { message, .. }
            | Self::MalformedPayload { message, .. } => message,
            Self::MissingCredential { .. } => "No credential token in sign-in payload",
        }
    }

    /// Creates Cancelled error at caller location.
    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Provider error at caller location.
    #[track_caller]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AuthService error at caller location.
    #[track_caller]
    pub fn auth_service(message: impl Into<String>) -> Self {
        Self::AuthService {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MalformedPayload error at caller location.
    #[track_caller]
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingCredential error at caller location.
    #[track_caller]
    pub fn missing_credential() -> Self {
        Self::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SignInError>;

/// Errors raised while installing the process logger.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to open log file {path}: {source} {location}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Install {
        message: String,
        location: ErrorLocation,
    },
}

impl LoggerError {
    /// Creates LogFile error at caller location.
    #[track_caller]
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Install error at caller location.
    #[track_caller]
    pub fn install(message: impl Into<String>) -> Self {
        Self::Install {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
