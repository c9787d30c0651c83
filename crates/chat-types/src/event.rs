use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events emitted by the request lifecycle and side panels.
/// The view layer drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A submission started processing
    TurnStart { turn_id: u64 },

    /// A message was appended to the session
    MessageAppended { message: Message },

    /// The message list should scroll to its end (follows every append)
    ScrollToEnd,

    /// The submission's turn finished, successfully or not
    TurnEnd { turn_id: u64 },

    /// The file picker resolved; `path` is empty on cancellation
    FileSelected { path: String },
}
