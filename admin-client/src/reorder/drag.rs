//! Drag gesture state machine

use crate::{ClientError, ClientResult};

/// A committed drop, consumed immediately by the reconciler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragIntent {
    pub entity_id: i64,
    pub source_index: usize,
    pub destination_index: usize,
}

impl DragIntent {
    /// 1-based position requested by the drop, before clamping
    pub fn target_seq_no(&self) -> i32 {
        self.destination_index as i32 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        entity_id: i64,
        source_index: usize,
    },
    Committing(DragIntent),
}

/// Result of a drop event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside a target or onto its own slot; nothing to do
    Cancelled,
    /// Valid move; the caller must commit it and then call `resolve`
    Commit(DragIntent),
    /// No drag was in progress
    Ignored,
}

/// Idle -> Dragging -> (Idle | Committing -> Idle)
///
/// A new drag cannot start until the pending commit is resolved.
#[derive(Debug, Clone, Default)]
pub struct DragReorderController {
    state: DragState,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Drives the view's drag affordances
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.state, DragState::Committing(_))
    }

    pub fn start(&mut self, entity_id: i64, source_index: usize) -> ClientResult<()> {
        if let DragState::Committing(intent) = self.state {
            tracing::debug!(
                pending = intent.entity_id,
                entity_id,
                "Drag rejected while a reorder is committing"
            );
            return Err(ClientError::Busy(
                "a reorder is still being saved".to_string(),
            ));
        }
        tracing::debug!(entity_id, source_index, "Drag started");
        self.state = DragState::Dragging {
            entity_id,
            source_index,
        };
        Ok(())
    }

    pub fn drop(&mut self, destination_index: Option<usize>) -> DropOutcome {
        let DragState::Dragging {
            entity_id,
            source_index,
        } = self.state
        else {
            return DropOutcome::Ignored;
        };

        match destination_index {
            Some(destination_index) if destination_index != source_index => {
                let intent = DragIntent {
                    entity_id,
                    source_index,
                    destination_index,
                };
                tracing::debug!(?intent, "Drop accepted");
                self.state = DragState::Committing(intent);
                DropOutcome::Commit(intent)
            }
            _ => {
                tracing::debug!(entity_id, ?destination_index, "Drop cancelled");
                self.state = DragState::Idle;
                DropOutcome::Cancelled
            }
        }
    }

    /// Leave Committing once the server answered (either way)
    pub fn resolve(&mut self) {
        if self.is_committing() {
            self.state = DragState::Idle;
        }
    }

    /// Abandon any gesture, e.g. when the list is replaced under it
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
