//! Drag-and-drop reordering of category and item lists
//!
//! - [`OrderedCollection`]: the rows the view renders
//! - [`DragReorderController`]: gesture state (Idle / Dragging / Committing)
//! - [`SequenceReconciler`]: the server-side shift, with timeout and cancellation
//! - [`ListQueryStore`]: filters, pagination, loading and fetch generations
//! - [`ReorderableList`]: owns all of the above for one list instance

mod collection;
mod drag;
mod list;
mod query;
mod reconciler;

pub use collection::OrderedCollection;
pub use drag::{DragIntent, DragReorderController, DragState, DropOutcome};
pub use list::{ReorderOutcome, ReorderableList};
pub use query::{FilterState, ListQueryStore};
pub use reconciler::{SequenceReconciler, clamp_target};
