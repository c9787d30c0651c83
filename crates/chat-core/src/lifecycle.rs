//! Request lifecycle: orchestrates one submission from input to reply.
//!
//! Per submission: optimistic append of the user message, one backend call,
//! then exactly one assistant append (the response text on success, a fixed
//! apology on any failure). The session therefore always alternates strictly
//! user/assistant, user first.
//!
//! Submissions made while a turn is in flight are queued and served FIFO
//! (queue-and-serialize policy). A queued submission's optimistic append
//! happens when its own turn begins, keeping the user/assistant pairs
//! adjacent.

use std::collections::VecDeque;

use chat_types::message::Message;
use chat_types::session::Session;
use chat_types::event::ChatEvent;

use crate::event_bus::EventBus;
use crate::ports::BackendPort;

/// Shown in place of a reply when the backend call fails. The underlying
/// error is logged and otherwise discarded.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// How the most recent turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Fulfilled,
    Failed,
}

pub struct ChatLifecycle {
    session: Session,
    phase: Phase,
    queue: VecDeque<String>,
    bus: EventBus,
    turn_counter: u64,
    last_outcome: Option<TurnOutcome>,
}

impl ChatLifecycle {
    pub fn new(bus: EventBus) -> Self {
        Self {
            session: Session::new(),
            phase: Phase::Idle,
            queue: VecDeque::new(),
            bus,
            turn_counter: 0,
            last_outcome: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<TurnOutcome> {
        self.last_outcome
    }

    /// Number of submissions waiting behind the current turn.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Accept a submission. Empty or all-whitespace input is silently
    /// ignored: no state change, no message, `false` returned. Otherwise
    /// the trimmed text joins the queue and the caller may clear its input
    /// field immediately.
    pub fn submit(&mut self, input: &str) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }
        self.queue.push_back(text.to_string());
        true
    }

    /// Serve queued submissions one at a time until the queue is empty.
    ///
    /// Takes `&mut self`, so two drains can never interleave; the only
    /// suspension point is the backend call itself.
    pub async fn run_pending(&mut self, backend: &dyn BackendPort) {
        while let Some(text) = self.queue.pop_front() {
            self.run_turn(text, backend).await;
        }
    }

    async fn run_turn(&mut self, text: String, backend: &dyn BackendPort) {
        self.phase = Phase::Submitting;
        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.bus.emit(ChatEvent::TurnStart { turn_id });

        // Optimistic append: the user's entry is visible before the backend
        // call resolves.
        self.append(Message::user(&text));

        let outcome = match backend.ask(&text).await {
            Ok(response) => {
                self.append(Message::assistant(response));
                TurnOutcome::Fulfilled
            }
            Err(e) => {
                log::warn!("backend query failed ({}): {}", backend.name(), e);
                self.append(Message::assistant(FALLBACK_REPLY));
                TurnOutcome::Failed
            }
        };

        self.last_outcome = Some(outcome);
        self.phase = Phase::Idle;
        self.bus.emit(ChatEvent::TurnEnd { turn_id });
    }

    /// Append to the session and notify the view: every append is followed
    /// by a scroll-to-end request.
    fn append(&mut self, message: Message) {
        self.session.append(message.clone());
        self.bus.emit(ChatEvent::MessageAppended { message });
        self.bus.emit(ChatEvent::ScrollToEnd);
    }
}
