use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("file picker error: {0}")]
    Picker(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for ChatError {
    fn from(e: std::io::Error) -> Self {
        ChatError::Io(e.to_string())
    }
}
