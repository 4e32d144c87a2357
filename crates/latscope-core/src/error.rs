//! Shared error type across latscope crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request body.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LatscopeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LatscopeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl LatscopeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LatscopeError::BadRequest(_) => ClientCode::BadRequest,
            LatscopeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LatscopeError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message without the variant prefix, as returned to HTTP callers.
    pub fn message(&self) -> String {
        match self {
            LatscopeError::BadRequest(m) | LatscopeError::Internal(m) => m.clone(),
            other => other.to_string(),
        }
    }
}
