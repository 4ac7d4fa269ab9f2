//! Message Board Model
//!
//! Replace-whole-list container for the local message endpoint.

use crate::api::{Message, MessageId};

#[derive(Clone, Debug, PartialEq)]
pub struct MessageNode {
    pub id: MessageId,
    pub content: String,
}

impl From<Message> for MessageNode {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MessageBoard {
    pub messages: Vec<MessageNode>,
    /// Error line shown instead of the list after a failed load
    pub error: Option<String>,
    /// At least one load has completed (successfully or not)
    pub loaded: bool,
    applied_seq: u64,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh payload, unless a newer load already landed
    pub fn replace(&mut self, seq: u64, messages: Vec<Message>) -> bool {
        if seq < self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.messages = messages.into_iter().map(MessageNode::from).collect();
        self.error = None;
        self.loaded = true;
        true
    }

    /// Record a failed load; the previous list is dropped so nothing stale shows
    pub fn fail(&mut self, seq: u64, error: String) -> bool {
        if seq < self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.messages.clear();
        self.error = Some(error);
        self.loaded = true;
        true
    }
}
