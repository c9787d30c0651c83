//! UI-level state that drives rendering.
//! This is a read-only projection of the lifecycle's session, updated each
//! frame by draining the EventBus. Message bodies are carried as the
//! markdown renderer's sanitized markup; raw text never reaches a markup
//! surface.

use chat_core::markdown;
use chat_types::event::ChatEvent;
use chat_types::message::{Message, Sender};
use chat_types::selection::FileSelection;
use chat_types::settings::SettingsDraft;

/// State visible to UI panels
pub struct UiState {
    /// Displayed conversation entries, in session order
    pub messages: Vec<DisplayMessage>,
    /// Input field content
    pub input_text: String,
    /// Working copy edited in the settings panel; `None` when closed
    pub settings_draft: Option<SettingsDraft>,
    /// Current file-picker result
    pub selection: FileSelection,
    /// Status line text
    pub status_text: String,
    busy: bool,
    scroll_to_end: bool,
}

/// A chat entry ready for display: sanitized markup plus the sender and
/// timestamp the layout needs for alignment and avatar choice.
#[derive(Clone)]
pub struct DisplayMessage {
    pub sender: Sender,
    pub text: String,
    pub markup: String,
    pub timestamp: String,
}

impl DisplayMessage {
    fn from_message(message: Message) -> Self {
        Self {
            markup: markdown::render(&message.text),
            sender: message.sender,
            text: message.text,
            timestamp: message.timestamp,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            settings_draft: None,
            selection: FileSelection::none(),
            status_text: "Ready".to_string(),
            busy: false,
            scroll_to_end: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::TurnStart { .. } => {
                    self.busy = true;
                    self.status_text = "Waiting for reply...".to_string();
                }
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(DisplayMessage::from_message(message));
                }
                ChatEvent::ScrollToEnd => {
                    self.scroll_to_end = true;
                }
                ChatEvent::TurnEnd { .. } => {
                    self.busy = false;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::FileSelected { path } => {
                    self.selection = FileSelection::from_path(path);
                    self.status_text = match self.selection.display_name() {
                        Some(name) => format!("Selected: {}", name),
                        None => "No file selected".to_string(),
                    };
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// One-shot: true if an append requested a scroll since the last call.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_end)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
