//! Message status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QueueError;

/// Lifecycle status of a message.
///
/// State transitions (forward only):
/// - Ready -> Processing   (peek_and_lock on the head)
/// - Processing -> Finished (acknowledge_head; the message leaves the queue)
///
/// Only `Ready` and `Processing` are ever stored in the queue. `Finished` is
/// observed solely on the message returned by a successful acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Enqueued, not yet handed to a reader.
    Ready,

    /// Locked by a reader; invisible to further reads.
    Processing,

    /// Acknowledged and removed.
    Finished,
}

impl MessageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::Ready => "ready",
            MessageStatus::Processing => "processing",
            MessageStatus::Finished => "finished",
        }
    }

    /// No further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, MessageStatus::Finished)
    }

    /// Can a reader lock a message in this status?
    pub fn is_visible(self) -> bool {
        matches!(self, MessageStatus::Ready)
    }

    pub fn can_transition_to(self, next: MessageStatus) -> bool {
        matches!(
            (self, next),
            (MessageStatus::Ready, MessageStatus::Processing)
                | (MessageStatus::Processing, MessageStatus::Finished)
        )
    }

    /// Validate `self -> next` and return the new status.
    pub fn transition(self, next: MessageStatus) -> Result<MessageStatus, QueueError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(QueueError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use super::MessageStatus::{Finished, Processing, Ready};

    #[rstest]
    #[case::lock(Ready, Processing, true)]
    #[case::acknowledge(Processing, Finished, true)]
    #[case::skip_processing(Ready, Finished, false)]
    #[case::relock(Processing, Processing, false)]
    #[case::unlock(Processing, Ready, false)]
    #[case::stay_ready(Ready, Ready, false)]
    #[case::revive_to_ready(Finished, Ready, false)]
    #[case::revive_to_processing(Finished, Processing, false)]
    #[case::stay_finished(Finished, Finished, false)]
    fn transition_matrix(
        #[case] from: MessageStatus,
        #[case] to: MessageStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);

        let result = from.transition(to);
        if allowed {
            assert_eq!(result, Ok(to));
        } else {
            assert_eq!(result, Err(QueueError::InvalidTransition { from, to }));
        }
    }

    #[test]
    fn only_finished_is_terminal() {
        assert!(!Ready.is_terminal());
        assert!(!Processing.is_terminal());
        assert!(Finished.is_terminal());
    }

    #[test]
    fn only_ready_is_visible() {
        assert!(Ready.is_visible());
        assert!(!Processing.is_visible());
        assert!(!Finished.is_visible());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Ready).unwrap(), "\"ready\"");
        assert_eq!(serde_json::to_string(&Processing).unwrap(), "\"processing\"");
        assert_eq!(serde_json::to_string(&Finished).unwrap(), "\"finished\"");

        let parsed: MessageStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(parsed, Processing);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Ready.to_string(), "ready");
        assert_eq!(
            QueueError::InvalidTransition {
                from: Finished,
                to: Processing
            }
            .to_string(),
            "invalid status transition: finished -> processing"
        );
    }
}
