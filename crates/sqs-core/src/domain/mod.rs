//! Domain model: message identity, lifecycle status and payload.

pub mod ids;
pub mod message;
pub mod payload;
pub mod state;

pub use ids::MessageId;
pub use message::Message;
pub use payload::{Payload, PayloadError};
pub use state::MessageStatus;
