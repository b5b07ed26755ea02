//! Shared error type across scalegate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed document.
    BadRequest,
    /// Policy exceeds limits of the selected service plan.
    PolicyLimitExceeded,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PolicyLimitExceeded => "POLICY_LIMIT_EXCEEDED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScaleGateError>;

/// Unified error type used by core and broker.
///
/// Plan-limit breaches are deliberately not a variant: violations travel as
/// values (`Vec<Violation>`) through the validation step's return channel, and
/// only the API layer turns them into a response carrying
/// [`ClientCode::PolicyLimitExceeded`].
#[derive(Debug, Error)]
pub enum ScaleGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ScaleGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ScaleGateError::BadRequest(_) => ClientCode::BadRequest,
            ScaleGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            ScaleGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
