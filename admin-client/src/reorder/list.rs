//! One reorderable list screen's state, owned in one place

use std::future::Future;

use shared::models::{Sequenced, StatusFilter};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::collection::OrderedCollection;
use super::drag::{DragReorderController, DropOutcome};
use super::query::{FilterState, ListQueryStore};
use super::reconciler::SequenceReconciler;
use shared::error::ErrorKind;

use crate::api::ReorderBackend;
use crate::notify::{Notification, Notifier};
use crate::{ClientConfig, ClientError, ClientResult};

/// What a finished drag did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Dropped in place or outside the list; no request was sent
    NoChange,
    /// The server accepted the move to `target_seq_no`
    Committed { target_seq_no: i32 },
}

/// A reorderable, filterable, paginated list of categories or items.
///
/// Owns the collection, the drag controller, the query store and the
/// lifetime token. Every network response is checked against the token, so
/// nothing arriving after [`unmount`](Self::unmount) (or drop) touches state.
pub struct ReorderableList<B: ReorderBackend, N: Notifier> {
    backend: B,
    notifier: N,
    collection: OrderedCollection<B::Entity>,
    drag: DragReorderController,
    query: ListQueryStore,
    reconciler: SequenceReconciler,
    fetch_timeout: std::time::Duration,
    lifetime: CancellationToken,
    /// A committed move whose refetch failed; rows are not server-confirmed
    unconfirmed: bool,
}

impl<B: ReorderBackend, N: Notifier> ReorderableList<B, N> {
    pub fn new(backend: B, notifier: N, config: &ClientConfig) -> Self {
        Self {
            backend,
            notifier,
            collection: OrderedCollection::new(),
            drag: DragReorderController::new(),
            query: ListQueryStore::new(config.page_size, config.search_debounce()),
            reconciler: SequenceReconciler::new(config.shift_timeout()),
            fetch_timeout: config.request_timeout(),
            lifetime: CancellationToken::new(),
            unconfirmed: false,
        }
    }

    // ========== Read access for the view ==========

    pub fn items(&self) -> &[B::Entity] {
        self.collection.as_slice()
    }

    pub fn collection(&self) -> &OrderedCollection<B::Entity> {
        &self.collection
    }

    pub fn total(&self) -> u64 {
        self.collection.total()
    }

    pub fn filters(&self) -> &FilterState {
        self.query.filters()
    }

    /// The view shows a placeholder and disables dragging while true
    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_committing(&self) -> bool {
        self.drag.is_committing()
    }

    /// True after a committed move whose refetch failed; drags are refused
    /// until a refresh succeeds
    pub fn is_unconfirmed(&self) -> bool {
        self.unconfirmed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========== Lifetime ==========

    /// Token that cancels this list's in-flight work when triggered
    pub fn cancel_handle(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    pub fn unmount(&self) {
        self.lifetime.cancel();
    }

    pub fn is_unmounted(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    // ========== Fetching ==========

    /// Fetch the list with the current filters.
    ///
    /// On failure the previous rows stay in place and an error is notified.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        if self.lifetime.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let generation = self.query.begin_fetch();
        let query = self.query.query();
        tracing::debug!(generation, ?query, "Fetching {} list", self.backend.label());

        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                self.query.finish_fetch(generation);
                return Err(ClientError::Cancelled);
            }
            result = tokio::time::timeout(self.fetch_timeout, self.backend.fetch(&query)) => {
                result.unwrap_or(Err(ClientError::Timeout(self.fetch_timeout)))
            }
        };

        // Never false here since `&mut self` serializes fetches; the store
        // guard covers callers driving `ListQueryStore` directly
        if !self.query.finish_fetch(generation) {
            return Ok(());
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    generation,
                    rows = page.items.len(),
                    total = page.total,
                    "Fetched {} list",
                    self.backend.label()
                );
                // A gesture against rows that no longer exist is meaningless
                if self.drag.is_dragging() {
                    self.drag.reset();
                }
                self.collection.replace_page(page);
                self.unconfirmed = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch {} list", self.backend.label());
                self.notifier.notify(Notification::error(format!(
                    "Failed to load {} list",
                    self.backend.label()
                )));
                Err(e)
            }
        }
    }

    /// Explicit refetch after a create/update/delete elsewhere
    pub async fn refetch(&mut self) -> ClientResult<()> {
        self.refresh().await
    }

    // ========== Drag and drop ==========

    pub fn begin_drag(&mut self, index: usize) -> ClientResult<()> {
        if self.query.is_loading() {
            return Err(ClientError::Busy("the list is loading".to_string()));
        }
        if self.unconfirmed {
            return Err(ClientError::Busy(
                "the list must be reloaded before reordering".to_string(),
            ));
        }
        let entity_id = self
            .collection
            .get(index)
            .map(Sequenced::id)
            .ok_or_else(|| ClientError::Validation(format!("no row at index {}", index)))?;
        self.drag.start(entity_id, index)
    }

    /// Finish the current gesture.
    ///
    /// A valid drop is applied locally first, then sent to the server, and
    /// the list is refetched whatever the answer was. A rejected move restores
    /// the pre-drop rows before refetching, so a failed refetch still shows
    /// the last server-confirmed order.
    pub async fn finish_drag(&mut self, destination: Option<usize>) -> ClientResult<ReorderOutcome> {
        let intent = match self.drag.drop(destination) {
            DropOutcome::Commit(intent) => intent,
            DropOutcome::Cancelled | DropOutcome::Ignored => return Ok(ReorderOutcome::NoChange),
        };

        let Some(entity) = self.collection.get(intent.source_index).cloned() else {
            self.drag.resolve();
            return Ok(ReorderOutcome::NoChange);
        };
        let list_len = self.collection.len();
        let label = self.backend.label();

        let confirmed = self.collection.clone();

        // Phase 1: optimistic local order
        self.collection
            .move_local(intent.source_index, Some(intent.destination_index));
        self.collection.renumber();

        // Phase 2: authoritative shift
        let result = self
            .reconciler
            .shift_sequence(&self.backend, &intent, entity.name(), list_len, &self.lifetime)
            .await;
        self.drag.resolve();

        match result {
            Ok(target_seq_no) => {
                tracing::info!(
                    entity_id = intent.entity_id,
                    target_seq_no,
                    "{} order updated",
                    label
                );
                self.notifier
                    .notify(Notification::success(format!("{} order updated", capitalize(label))));
                // Cleared by a successful refresh
                self.unconfirmed = true;
                self.refresh_after_commit().await?;
                Ok(ReorderOutcome::Committed { target_seq_no })
            }
            Err(ClientError::Cancelled) => {
                self.collection = confirmed;
                tracing::debug!(entity_id = intent.entity_id, "Reorder abandoned on unmount");
                Err(ClientError::Cancelled)
            }
            Err(e) => {
                tracing::error!(
                    entity_id = intent.entity_id,
                    error = %e,
                    "Failed to update {} order",
                    label
                );
                self.notifier
                    .notify(Notification::error(format!("Failed to update {} order", label)));
                self.collection = confirmed;
                self.refresh_after_commit().await?;
                Err(e)
            }
        }
    }

    /// Refetch after a commit; only cancellation is propagated, load failures
    /// were already notified and leave the current rows.
    async fn refresh_after_commit(&mut self) -> ClientResult<()> {
        match self.refresh().await {
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            _ => Ok(()),
        }
    }

    // ========== Filters and pagination ==========

    /// Schedule a name filter change; applied by [`settle_search`](Self::settle_search)
    pub fn set_name_search(&mut self, term: impl Into<String>) {
        self.query.set_name_search(term, Instant::now());
    }

    /// Schedule a sequence filter change; applied by [`settle_search`](Self::settle_search)
    pub fn set_seq_search(&mut self, term: impl Into<String>) {
        self.query.set_seq_search(term, Instant::now());
    }

    pub fn has_pending_search(&self) -> bool {
        self.query.has_pending_search()
    }

    /// Wait out the debounce window, apply the pending search terms and
    /// refetch if they changed anything. Returns whether a fetch happened.
    pub async fn settle_search(&mut self) -> ClientResult<bool> {
        let Some(deadline) = self.query.pending_deadline() else {
            return Ok(false);
        };

        tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return Err(ClientError::Cancelled),
            _ = tokio::time::sleep_until(deadline) => {}
        }

        if !self.query.apply_pending() {
            return Ok(false);
        }
        self.refresh().await?;
        Ok(true)
    }

    pub async fn set_status_filter(&mut self, status: StatusFilter) -> ClientResult<()> {
        if self.query.set_status_filter(status) {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn set_page(&mut self, page: u32) -> ClientResult<()> {
        if self.query.set_page(page) {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn set_page_size(&mut self, page_size: i32) -> ClientResult<()> {
        if self.query.set_page_size(page_size) {
            self.refresh().await?;
        }
        Ok(())
    }

    // ========== Create / update / delete ==========

    /// Run a create/update/delete against the backend, notify the outcome,
    /// and refetch when the server state may have changed.
    ///
    /// Validation and authorization failures leave the list untouched.
    pub async fn mutate<T, F, Fut>(&mut self, success_message: &str, action: F) -> ClientResult<T>
    where
        B: Clone,
        F: FnOnce(B) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if self.lifetime.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => return Err(ClientError::Cancelled),
            result = action(self.backend.clone()) => result,
        };

        match result {
            Ok(value) => {
                self.notifier.notify(Notification::success(success_message));
                self.refresh_after_commit().await?;
                Ok(value)
            }
            Err(e) => {
                let Some(kind) = e.kind() else {
                    return Err(e);
                };
                let label = self.backend.label();
                tracing::warn!(error = %e, ?kind, "{} mutation failed", label);
                let message = match kind {
                    ErrorKind::Network => format!("Failed to save {}, please try again", label),
                    _ => e.to_string(),
                };
                self.notifier.notify(Notification::error(message));
                if kind.needs_refetch() {
                    self.refresh_after_commit().await?;
                }
                Err(e)
            }
        }
    }
}

impl<B: ReorderBackend, N: Notifier> Drop for ReorderableList<B, N> {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("category"), "Category");
        assert_eq!(capitalize(""), "");
    }
}
