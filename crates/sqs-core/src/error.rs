use thiserror::Error;

use crate::domain::MessageStatus;

/// Errors returned by queue operations.
///
/// The display strings of `EmptyQueue` and `NotProcessed` are sent verbatim
/// to clients, so they are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("empty queue")]
    EmptyQueue,

    #[error("message has not yet been processed")]
    NotProcessed,

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: MessageStatus,
        to: MessageStatus,
    },
}
