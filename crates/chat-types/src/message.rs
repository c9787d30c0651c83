use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the conversation.
///
/// Fields are fixed at construction; the session never edits an entry after
/// it has been appended. The timestamp is a best-effort local clock reading
/// taken when the message is created and carries no ordering guarantee;
/// ordering comes from the session's insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: local_timestamp(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: local_timestamp(),
        }
    }

    /// Construct with an explicit timestamp (deterministic tests, imports).
    pub fn at(text: impl Into<String>, sender: Sender, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: timestamp.into(),
        }
    }
}

/// Wall-clock time in the local timezone, formatted for display.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
