//! Message: id + status + payload.

use serde::{Deserialize, Serialize};

use super::{MessageId, MessageStatus, Payload};
use crate::error::QueueError;

/// A message held by the queue.
///
/// - `id` is fixed at creation.
/// - `status` only moves forward, and only through `mark_*`.
/// - `payload` is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    status: MessageStatus,
    payload: Payload,
}

impl Message {
    /// New message in `Ready` status.
    pub fn new(id: MessageId, payload: Payload) -> Self {
        Self {
            id,
            status: MessageStatus::Ready,
            payload,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn has_status(&self, status: MessageStatus) -> bool {
        self.status == status
    }

    /// Ready -> Processing.
    pub fn mark_processing(&mut self) -> Result<(), QueueError> {
        self.advance(MessageStatus::Processing)
    }

    /// Processing -> Finished.
    pub fn mark_finished(&mut self) -> Result<(), QueueError> {
        self.advance(MessageStatus::Finished)
    }

    fn advance(&mut self, next: MessageStatus) -> Result<(), QueueError> {
        self.status = self.status.transition(next)?;
        Ok(())
    }
}
