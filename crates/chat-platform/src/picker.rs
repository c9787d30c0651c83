//! Native file-picker adapter.
//!
//! Wraps the desktop open-file dialog behind `FilePickerPort`. The dialog
//! blocks its thread, so it runs on the blocking pool. Cancellation maps to
//! the empty-path sentinel, never to an error.

use async_trait::async_trait;

use chat_core::ports::FilePickerPort;
use chat_types::{ChatError, Result};

pub struct NativeFilePicker;

impl NativeFilePicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeFilePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilePickerPort for NativeFilePicker {
    async fn select_file(&self) -> Result<String> {
        let picked = tokio::task::spawn_blocking(|| {
            rfd::FileDialog::new()
                .set_title("Select a file to talk to")
                .add_filter("Plain text files", &["txt", "md"])
                .pick_file()
        })
        .await
        .map_err(|e| ChatError::Picker(e.to_string()))?;

        match picked {
            Some(path) => {
                let path = path.to_string_lossy().into_owned();
                log::debug!("selected file: {}", path);
                Ok(path)
            }
            None => Ok(String::new()),
        }
    }
}
