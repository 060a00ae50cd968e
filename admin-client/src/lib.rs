//! Admin Client - catalog administration over the POS REST API
//!
//! Typed calls for categories, items and attachments, plus the
//! drag-and-drop reordering state used by the admin dashboard lists.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod notify;
pub mod reorder;

pub use api::{AttachmentApi, CategoryApi, ItemApi, ReorderBackend};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, MultipartBody, NetworkHttpClient};
pub use notify::{Notification, NotificationLevel, NotificationLog, Notifier};
pub use reorder::{DragState, ReorderOutcome, ReorderableList};

// Re-export shared types for convenience
pub use shared::models::{Category, EntityStatus, Item, Sequenced, StatusFilter};
pub use shared::request::ListQuery;
pub use shared::response::PagedList;
