//! sqs-core
//!
//! Queue core for the single-queue message broker.
//!
//! - **domain**: message model (ids, status state machine, payload)
//! - **ports**: clock and id generation seams
//! - **queue**: `MessageQueue` trait + in-memory implementation
//! - **error**: queue error taxonomy

pub mod domain;
pub mod error;
pub mod ports;
pub mod queue;

pub use domain::{Message, MessageId, MessageStatus, Payload, PayloadError};
pub use error::QueueError;
pub use queue::{InMemoryQueue, MessageQueue, QueueCounts};
