//! IdGenerator port.
//!
//! # Implementations
//! - **UlidGenerator**: clock timestamp + random bits

use crate::domain::MessageId;
use crate::ports::Clock;
use ulid::Ulid;

/// Hands out message ids.
///
/// # Thread Safety
/// - `Send + Sync`: shared by every request handler through the queue.
pub trait IdGenerator: Send + Sync {
    fn generate_message_id(&self) -> MessageId;
}

/// ULID generator driven by a `Clock`.
///
/// With a `FixedClock` every id shares the same timestamp part, but the
/// 80 random bits still keep them distinct.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_message_id(&self) -> MessageId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        MessageId::from(ulid)
    }
}
