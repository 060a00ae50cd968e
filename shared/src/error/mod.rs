//! Unified error system for the admin dashboard
//!
//! - [`ErrorCode`]: Standardized error codes shared with the backend
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`ErrorKind`]: The four user-facing failure buckets
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response envelope
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::with_message(ErrorCode::SequenceConflict, "Category was renamed")
//!     .with_detail("id", 42);
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//! ```

mod category;
mod codes;
mod http;
mod kind;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use kind::ErrorKind;
pub use types::{ApiResponse, AppError, AppResult};
