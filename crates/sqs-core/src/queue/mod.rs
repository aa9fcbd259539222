//! Queue module: the `MessageQueue` port and its in-memory implementation.

mod memory;

pub use memory::InMemoryQueue;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Message, Payload};
use crate::error::QueueError;

/// Snapshot of how many stored messages sit in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub ready: usize,
    pub processing: usize,
}

/// Single FIFO queue with a visibility lock on its head.
///
/// Contract:
/// - Messages leave strictly in enqueue order.
/// - Only the head is ever read or removed.
/// - At most one reader holds the head at a time (`Processing`).
/// - Nothing is removed unless it was locked first.
///
/// Every method is one critical section and returns immediately; absence is
/// reported, never awaited. Returned messages are snapshots.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Append a new `Ready` message to the tail.
    async fn enqueue(&self, payload: Payload) -> Message;

    /// Lock the head for processing.
    ///
    /// `None` when the queue is empty or the head is already locked.
    async fn peek_and_lock(&self) -> Option<Message>;

    /// Remove the locked head; the returned copy carries `Finished`.
    ///
    /// Fails with `EmptyQueue` or `NotProcessed` and leaves the queue as is.
    async fn acknowledge_head(&self) -> Result<Message, QueueError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn counts(&self) -> QueueCounts;
}
