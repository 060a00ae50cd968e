//! Authoritative sequence shift against the server

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::drag::DragIntent;
use crate::api::ReorderBackend;
use crate::{ClientError, ClientResult};

/// Clamp a drop position to a 1-based sequence number within `[1, len]`.
///
/// Drag libraries occasionally report destinations past the end of the
/// visible list; the server must never be asked for such a slot.
pub fn clamp_target(destination_index: usize, len: usize) -> i32 {
    destination_index.saturating_add(1).clamp(1, len.max(1)) as i32
}

/// Sends the shift request for a committed drop.
///
/// The caller owns recovery: on any outcome the list is refetched, so the
/// server's renumbering of siblings always wins over the optimistic order.
#[derive(Debug, Clone)]
pub struct SequenceReconciler {
    timeout: Duration,
}

impl SequenceReconciler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Shift `intent.entity_id` to its clamped target; returns the target sent.
    pub async fn shift_sequence<B: ReorderBackend>(
        &self,
        backend: &B,
        intent: &DragIntent,
        name: &str,
        list_len: usize,
        cancel: &CancellationToken,
    ) -> ClientResult<i32> {
        let target = clamp_target(intent.destination_index, list_len);
        tracing::debug!(
            entity_id = intent.entity_id,
            target_seq_no = target,
            requested = intent.target_seq_no(),
            "Shifting {} sequence",
            backend.label()
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = tokio::time::timeout(self.timeout, backend.shift(intent.entity_id, name, target)) => {
                match result {
                    Ok(Ok(())) => Ok(target),
                    Ok(Err(e)) => Err(e),
                    Err(_) => Err(ClientError::Timeout(self.timeout)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_target() {
        assert_eq!(clamp_target(0, 3), 1);
        assert_eq!(clamp_target(2, 3), 3);
        assert_eq!(clamp_target(3, 3), 3);
        assert_eq!(clamp_target(usize::MAX, 3), 3);
        assert_eq!(clamp_target(4, 0), 1);
    }
}
