//! User-facing error taxonomy
//!
//! Every failure the dashboard can show ends up in one of four buckets, and
//! the bucket decides how the list recovers (hold the current rows, or
//! refetch them).

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected before any request was sent, or rejected by the server as
    /// malformed. No state was changed.
    Validation,
    /// The request referenced a record that moved, vanished or changed.
    Conflict,
    /// Transport failure, timeout or server fault.
    Network,
    /// Missing or expired credentials, or insufficient permissions.
    Authorization,
}

impl ErrorKind {
    /// Whether the list should be refetched to recover from this error.
    pub fn needs_refetch(&self) -> bool {
        matches!(self, Self::Conflict | Self::Network)
    }
}

impl ErrorCode {
    /// Map this code onto the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::ProductInvalidPrice
            | Self::FileTooLarge
            | Self::UnsupportedFileFormat
            | Self::NoFileProvided => ErrorKind::Validation,

            Self::NotFound
            | Self::AlreadyExists
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::CategoryHasProducts
            | Self::CategoryNameExists
            | Self::SequenceConflict
            | Self::SequenceOutOfRange
            | Self::AttachmentNotFound => ErrorKind::Conflict,

            _ => match self.category() {
                ErrorCategory::Auth | ErrorCategory::Permission => ErrorKind::Authorization,
                _ => ErrorKind::Network,
            },
        }
    }
}
