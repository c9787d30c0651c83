//! Simple event bus for decoupled communication between the request
//! lifecycle and the UI.
//!
//! The lifecycle runs on a worker task while the UI runs on the frame loop,
//! so the buffer is behind a mutex. Events are buffered and drained by the
//! UI on each frame.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chat_types::event::ChatEvent;

/// Shared event bus, clone-cheap via Arc.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the lifecycle and side panels.
    pub fn emit(&self, event: ChatEvent) {
        self.lock().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.lock().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ChatEvent>> {
        // A panicked holder can only have left a fully-formed queue behind.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
