//! Shared types for the restaurant admin dashboard
//!
//! Wire models, request DTOs, list responses and the error code table used by
//! the admin client and by anything that speaks the dashboard API.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode, ErrorKind};
pub use models::{Category, EntityStatus, Item, Sequenced, StatusFilter};
pub use request::{ListQuery, PAGE_SIZE_ALL, ShiftCategorySeq, ShiftProductSeq};
pub use response::PagedList;
