//! Ordering contract shared by every reorderable entity

/// An entity positioned among its siblings by a 1-based sequence number.
///
/// Ids are assigned by the server and never change; `seq_no` is the only
/// field the client rewrites, and only for optimistic rendering.
pub trait Sequenced: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn seq_no(&self) -> i32;
    fn set_seq_no(&mut self, seq_no: i32);
}
