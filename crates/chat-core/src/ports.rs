//! Port traits: the boundary between the conversation core and the
//! outside world.
//!
//! The traits are defined here in `chat-core` (pure Rust). Implementations
//! live in `chat-platform` (HTTP backend, native file dialog). The core
//! never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::Result;

/// The opaque language-model backend: one query in, one response out.
///
/// No streaming, no cancellation, no timeout at this boundary. A call that
/// never resolves parks its turn indefinitely.
#[async_trait]
pub trait BackendPort: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String>;

    /// Name of this backend (for logging/debug)
    fn name(&self) -> &str;
}

/// The external file-choice capability.
///
/// Resolves with the selected path, or the empty string when the user
/// cancels; cancellation is not an error.
#[async_trait]
pub trait FilePickerPort: Send + Sync {
    async fn select_file(&self) -> Result<String>;
}
