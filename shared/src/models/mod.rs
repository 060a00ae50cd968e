//! Data models
//!
//! Wire types exchanged with the dashboard backend. All IDs are `i64`.

pub mod attachment;
pub mod category;
pub mod product;
pub mod sequenced;
pub mod status;

// Re-exports
pub use attachment::*;
pub use category::*;
pub use product::*;
pub use sequenced::*;
pub use status::*;
