//! Entity APIs over [`HttpClient`](crate::http::HttpClient)
//!
//! [`ReorderBackend`] is the narrow seam the reorderable list talks through:
//! fetch one page, and shift one entity to a new position.

mod attachment;
mod category;
mod item;

pub use attachment::AttachmentApi;
pub use category::CategoryApi;
pub use item::ItemApi;

use async_trait::async_trait;
use shared::models::Sequenced;
use shared::request::ListQuery;
use shared::response::PagedList;

use crate::ClientResult;

#[async_trait]
pub trait ReorderBackend: Send + Sync {
    type Entity: Sequenced;

    /// Singular noun used in notifications, e.g. "category"
    fn label(&self) -> &'static str;

    /// Fetch one page, pre-sorted by `seq_no` ascending
    async fn fetch(&self, query: &ListQuery) -> ClientResult<PagedList<Self::Entity>>;

    /// Move `id` to the 1-based position `new_seq_no`.
    ///
    /// The server renumbers the siblings; `name` must match the record at `id`.
    async fn shift(&self, id: i64, name: &str, new_seq_no: i32) -> ClientResult<()>;
}
