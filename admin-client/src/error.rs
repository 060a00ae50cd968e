//! Client error types

use std::time::Duration;

use shared::error::{AppError, ErrorCode, ErrorKind};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The target record changed on the server
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Structured error returned by the server, or raised by local validation
    #[error("{message}")]
    Api { code: ErrorCode, message: String },

    /// No response within the allotted time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The owning list was dropped or unmounted before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// Another operation on the same list is still in flight
    #[error("Busy: {0}")]
    Busy(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The closest error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Unauthorized => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Conflict(_) => ErrorCode::SequenceConflict,
            Self::Api { code, .. } => *code,
            Self::Timeout(_) => ErrorCode::TimeoutError,
            Self::Cancelled => ErrorCode::RequestCancelled,
            Self::Busy(_) => ErrorCode::InvalidRequest,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// The user-facing failure bucket, or `None` for silent cancellation
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Cancelled => None,
            // A malformed body is a transport-level problem, not the user's input
            Self::InvalidResponse(_) | Self::Serialization(_) => Some(ErrorKind::Network),
            other => Some(other.code().kind()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        Self::Api {
            code: err.code,
            message: err.message,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
