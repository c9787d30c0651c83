use serde::{Deserialize, Serialize};

use crate::message::Message;

/// The ordered, append-only conversation history for the current run.
///
/// `messages` is private on purpose: `append` is the only mutator, and no
/// operation removes or edits an existing entry. Unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` as the last entry.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn entries(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
