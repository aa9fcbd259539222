//! In-memory queue implementation.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{MessageQueue, QueueCounts};
use crate::domain::{Message, MessageStatus, Payload};
use crate::error::QueueError;
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};

const INITIAL_CAPACITY: usize = 1000;

/// In-memory queue state.
struct InMemoryQueueState {
    /// Messages in enqueue order; index 0 is the head.
    messages: VecDeque<Message>,
}

impl InMemoryQueueState {
    fn new() -> Self {
        Self {
            messages: VecDeque::with_capacity(INITIAL_CAPACITY),
        }
    }

    fn counts(&self) -> QueueCounts {
        let mut counts = QueueCounts::default();
        for message in &self.messages {
            match message.status() {
                MessageStatus::Ready => counts.ready += 1,
                MessageStatus::Processing => counts.processing += 1,
                // never stored
                MessageStatus::Finished => {}
            }
        }
        counts
    }
}

/// In-memory FIFO queue.
///
/// All state sits behind one mutex, so each operation is a single critical
/// section. Clones are handles onto the same queue.
#[derive(Clone)]
pub struct InMemoryQueue {
    state: Arc<Mutex<InMemoryQueueState>>,
    id_gen: Arc<dyn IdGenerator>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UlidGenerator::new(SystemClock)))
    }

    pub fn with_id_generator(id_gen: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryQueueState::new())),
            id_gen,
        }
    }
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageQueue for InMemoryQueue {
    async fn enqueue(&self, payload: Payload) -> Message {
        let message = Message::new(self.id_gen.generate_message_id(), payload);

        let mut state = self.state.lock().await;
        state.messages.push_back(message.clone());

        tracing::debug!(id = %message.id(), len = state.messages.len(), "message enqueued");
        message
    }

    async fn peek_and_lock(&self) -> Option<Message> {
        let mut state = self.state.lock().await;
        let head = state.messages.front_mut()?;

        // Head already locked by another reader.
        if !head.status().is_visible() {
            tracing::trace!(id = %head.id(), "head is locked");
            return None;
        }

        head.mark_processing().ok()?;
        tracing::debug!(id = %head.id(), "head locked for processing");
        Some(head.clone())
    }

    async fn acknowledge_head(&self) -> Result<Message, QueueError> {
        let mut state = self.state.lock().await;
        let head = state.messages.front_mut().ok_or(QueueError::EmptyQueue)?;

        if head.has_status(MessageStatus::Ready) {
            return Err(QueueError::NotProcessed);
        }

        head.mark_finished()?;
        let message = state.messages.pop_front().ok_or(QueueError::EmptyQueue)?;

        tracing::debug!(id = %message.id(), len = state.messages.len(), "message acknowledged");
        Ok(message)
    }

    async fn len(&self) -> usize {
        self.state.lock().await.messages.len()
    }

    async fn counts(&self) -> QueueCounts {
        self.state.lock().await.counts()
    }
}
