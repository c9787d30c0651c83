//! OpenAI-compatible backend adapter.
//!
//! Speaks the chat completions protocol: one user query in, one response
//! message out. Works with OpenAI and any provider exposing the same API
//! shape. Streaming is deliberately not used; the port models a single
//! request → single response exchange.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use chat_core::ports::BackendPort;
use chat_types::settings::ChatSettings;
use chat_types::{ChatError, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiCompatBackend {
    settings: ChatSettings,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompatBackend {
    pub fn new(settings: ChatSettings) -> Self {
        Self::with_base_url(settings, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(settings: ChatSettings, base_url: impl Into<String>) -> Self {
        Self {
            settings,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn build_request_body(&self, query: &str) -> Value {
        json!({
            "model": self.settings.model.id(),
            "temperature": self.settings.temperature,
            "messages": [{ "role": "user", "content": query }],
        })
    }
}

#[async_trait]
impl BackendPort for OpenAiCompatBackend {
    async fn ask(&self, query: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(query);

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.settings.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Backend(format!("HTTP {}: {}", status, text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::Backend("no choices in response".to_string()))?;

        Ok(choice.message.content)
    }

    fn name(&self) -> &str {
        "openai-compat"
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: String,
}
