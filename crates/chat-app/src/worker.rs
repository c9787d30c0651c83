//! The single worker task that owns the request lifecycle.
//!
//! All session mutations happen here, one command at a time: the UI thread
//! only sends commands and drains the event bus, so no two mutations can
//! interleave. Submissions queue behind an in-flight backend call.

use std::path::PathBuf;

use chat_core::event_bus::EventBus;
use chat_core::lifecycle::ChatLifecycle;
use chat_core::ports::{BackendPort, FilePickerPort};
use chat_core::transcript;
use chat_platform::{NativeFilePicker, OpenAiCompatBackend};
use chat_types::event::ChatEvent;
use chat_types::settings::ChatSettings;
use tokio::sync::mpsc;

/// Commands from the UI thread to the worker.
pub enum AppCommand {
    /// Submit user input to the request lifecycle
    Submit(String),
    /// Replace the backend with one built from newly committed settings
    UpdateSettings(ChatSettings),
    /// Open the native file picker
    PickFile,
    /// Write the session as an HTML transcript
    SaveTranscript(PathBuf),
}

pub fn spawn(
    runtime: &tokio::runtime::Runtime,
    bus: EventBus,
    egui_ctx: egui::Context,
    settings: ChatSettings,
) -> mpsc::UnboundedSender<AppCommand> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    runtime.spawn(async move {
        let mut lifecycle = ChatLifecycle::new(bus.clone());
        let mut backend: Box<dyn BackendPort> = Box::new(OpenAiCompatBackend::new(settings));
        let picker = NativeFilePicker::new();

        while let Some(command) = rx.recv().await {
            match command {
                AppCommand::Submit(text) => {
                    if lifecycle.submit(&text) {
                        lifecycle.run_pending(backend.as_ref()).await;
                    }
                }
                AppCommand::UpdateSettings(settings) => {
                    log::info!("settings committed; rebuilding backend");
                    backend = Box::new(OpenAiCompatBackend::new(settings));
                }
                AppCommand::PickFile => match picker.select_file().await {
                    Ok(path) => bus.emit(ChatEvent::FileSelected { path }),
                    Err(e) => log::warn!("file picker failed: {}", e),
                },
                AppCommand::SaveTranscript(path) => {
                    let html = transcript::to_html(lifecycle.session());
                    match std::fs::write(&path, html) {
                        Ok(()) => log::info!("transcript saved to {}", path.display()),
                        Err(e) => log::warn!("transcript save failed: {}", e),
                    }
                }
            }
            egui_ctx.request_repaint();
        }
    });

    tx
}
