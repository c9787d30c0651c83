use serde::{Deserialize, Serialize};

pub const TEMPERATURE_MIN: f32 = 0.0;
pub const TEMPERATURE_MAX: f32 = 2.0;
pub const TEMPERATURE_STEP: f32 = 0.1;

/// The fixed set of model identifiers the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    Gpt35Turbo,
    Gpt4,
}

impl ChatModel {
    /// Wire identifier sent to the backend.
    pub fn id(&self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
            ChatModel::Gpt4 => "gpt-4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "GPT-3.5 Turbo",
            ChatModel::Gpt4 => "GPT-4",
        }
    }

    pub fn all() -> &'static [ChatModel] {
        &[ChatModel::Gpt35Turbo, ChatModel::Gpt4]
    }
}

/// Committed chat configuration. Lives in process memory only; replaced as a
/// whole when a draft is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub api_key: Option<String>,
    pub model: ChatModel,
    pub temperature: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: ChatModel::Gpt35Turbo,
            temperature: 1.0,
        }
    }
}

/// A working copy of the settings, edited in the settings panel.
///
/// The draft is mutated freely; the committed `ChatSettings` changes only
/// when `commit` is called. Discarding is simply dropping the draft.
#[derive(Debug, Clone)]
pub struct SettingsDraft {
    api_key: String,
    model: ChatModel,
    temperature: f32,
}

impl SettingsDraft {
    /// Structural copy of the committed settings.
    pub fn open(committed: &ChatSettings) -> Self {
        Self {
            api_key: committed.api_key.clone().unwrap_or_default(),
            model: committed.model,
            temperature: committed.temperature,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Two-way binding handle for the API key input. No format constraint
    /// at this layer.
    pub fn api_key_mut(&mut self) -> &mut String {
        &mut self.api_key
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn model_mut(&mut self) -> &mut ChatModel {
        &mut self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Binding handle for the temperature slider; the control itself
    /// enforces the range and step.
    pub fn temperature_mut(&mut self) -> &mut f32 {
        &mut self.temperature
    }

    /// Programmatic update, clamped to `[0, 2]` in increments of 0.1.
    pub fn set_temperature(&mut self, value: f32) {
        let clamped = value.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
        self.temperature = (clamped / TEMPERATURE_STEP).round() * TEMPERATURE_STEP;
    }

    /// Consume the draft and produce the new committed settings.
    pub fn commit(self) -> ChatSettings {
        let api_key = self.api_key.trim();
        ChatSettings {
            api_key: if api_key.is_empty() {
                None
            } else {
                Some(api_key.to_string())
            },
            model: self.model,
            temperature: self.temperature.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX),
        }
    }
}
