#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chat_types::event::ChatEvent;
    use chat_types::message::Sender;
    use chat_types::{ChatError, Result};

    use crate::event_bus::EventBus;
    use crate::lifecycle::{ChatLifecycle, Phase, TurnOutcome, FALLBACK_REPLY};
    use crate::markdown;
    use crate::ports::BackendPort;
    use crate::transcript;

    // ─── Test Backends ───────────────────────────────────────

    /// Echoes the query back with a prefix.
    struct EchoBackend;

    #[async_trait]
    impl BackendPort for EchoBackend {
        async fn ask(&self, query: &str) -> Result<String> {
            Ok(format!("echo: {}", query))
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    /// Rejects every call.
    struct FailingBackend;

    #[async_trait]
    impl BackendPort for FailingBackend {
        async fn ask(&self, _query: &str) -> Result<String> {
            Err(ChatError::Backend("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    /// Pops one scripted result per call.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String>>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl BackendPort for ScriptedBackend {
        async fn ask(&self, _query: &str) -> Result<String> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ChatError::Backend("script exhausted".to_string())))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    use futures::executor::block_on;

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(ChatEvent::TurnStart { turn_id: 1 });
        bus.emit(ChatEvent::ScrollToEnd);

        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_drain_empties() {
        let bus = EventBus::new();
        bus.emit(ChatEvent::TurnStart { turn_id: 1 });
        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(ChatEvent::ScrollToEnd);
        assert!(bus2.has_pending());

        let events = bus2.drain();
        assert_eq!(events.len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── Lifecycle Tests ─────────────────────────────────────

    #[test]
    fn test_lifecycle_initial_state() {
        let lifecycle = ChatLifecycle::new(EventBus::new());
        assert_eq!(lifecycle.phase(), Phase::Idle);
        assert!(lifecycle.session().is_empty());
        assert_eq!(lifecycle.pending(), 0);
        assert!(lifecycle.last_outcome().is_none());
    }

    #[test]
    fn test_empty_submission_is_silent_noop() {
        let bus = EventBus::new();
        let mut lifecycle = ChatLifecycle::new(bus.clone());

        assert!(!lifecycle.submit(""));
        assert!(!lifecycle.submit("   "));
        assert!(!lifecycle.submit("\n\t "));

        assert_eq!(lifecycle.pending(), 0);
        assert!(lifecycle.session().is_empty());
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_single_turn_appends_user_then_assistant() {
        let bus = EventBus::new();
        let mut lifecycle = ChatLifecycle::new(bus.clone());

        assert!(lifecycle.submit("Hi"));
        block_on(lifecycle.run_pending(&EchoBackend));

        let entries = lifecycle.session().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sender, Sender::User);
        assert_eq!(entries[0].text, "Hi");
        assert_eq!(entries[1].sender, Sender::Assistant);
        assert_eq!(entries[1].text, "echo: Hi");

        assert_eq!(lifecycle.phase(), Phase::Idle);
        assert_eq!(lifecycle.last_outcome(), Some(TurnOutcome::Fulfilled));
    }

    #[test]
    fn test_turn_event_sequence() {
        let bus = EventBus::new();
        let mut lifecycle = ChatLifecycle::new(bus.clone());

        lifecycle.submit("Hi");
        block_on(lifecycle.run_pending(&EchoBackend));

        let events = bus.drain();
        assert_eq!(events.len(), 6);
        assert!(matches!(events[0], ChatEvent::TurnStart { turn_id: 1 }));
        assert!(matches!(
            &events[1],
            ChatEvent::MessageAppended { message } if message.sender == Sender::User
        ));
        assert!(matches!(events[2], ChatEvent::ScrollToEnd));
        assert!(matches!(
            &events[3],
            ChatEvent::MessageAppended { message } if message.sender == Sender::Assistant
        ));
        assert!(matches!(events[4], ChatEvent::ScrollToEnd));
        assert!(matches!(events[5], ChatEvent::TurnEnd { turn_id: 1 }));
    }

    #[test]
    fn test_submission_text_is_trimmed() {
        let mut lifecycle = ChatLifecycle::new(EventBus::new());
        lifecycle.submit("  hello  ");
        block_on(lifecycle.run_pending(&EchoBackend));
        assert_eq!(lifecycle.session().entries()[0].text, "hello");
    }

    #[test]
    fn test_backend_failure_appends_fixed_apology() {
        let bus = EventBus::new();
        let mut lifecycle = ChatLifecycle::new(bus.clone());

        lifecycle.submit("Hi");
        block_on(lifecycle.run_pending(&FailingBackend));

        let entries = lifecycle.session().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].sender, Sender::Assistant);
        assert_eq!(entries[1].text, FALLBACK_REPLY);
        // The raw error never surfaces.
        assert!(!entries[1].text.contains("connection refused"));

        assert_eq!(lifecycle.phase(), Phase::Idle);
        assert_eq!(lifecycle.last_outcome(), Some(TurnOutcome::Failed));
    }

    #[test]
    fn test_session_length_is_twice_valid_submissions() {
        let mut lifecycle = ChatLifecycle::new(EventBus::new());
        let backend = ScriptedBackend::new(vec![
            Ok("one".to_string()),
            Err(ChatError::Backend("boom".to_string())),
            Ok("three".to_string()),
        ]);

        lifecycle.submit("q1");
        lifecycle.submit("");
        lifecycle.submit("q2");
        lifecycle.submit("   ");
        lifecycle.submit("q3");
        block_on(lifecycle.run_pending(&backend));

        let entries = lifecycle.session().entries();
        assert_eq!(entries.len(), 6);
        for pair in entries.chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Assistant);
        }
    }

    #[test]
    fn test_queue_and_serialize_keeps_pairs_adjacent() {
        // Policy pin: submissions made while a turn is in flight are queued
        // FIFO, and each queued submission's user entry is appended when its
        // own turn begins, so replies never interleave across submissions.
        let mut lifecycle = ChatLifecycle::new(EventBus::new());

        lifecycle.submit("first");
        lifecycle.submit("second");
        assert_eq!(lifecycle.pending(), 2);

        block_on(lifecycle.run_pending(&EchoBackend));

        let texts: Vec<&str> = lifecycle
            .session()
            .entries()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "echo: first", "second", "echo: second"]);
        assert_eq!(lifecycle.pending(), 0);
    }

    #[test]
    fn test_turn_ids_increase_across_submissions() {
        let bus = EventBus::new();
        let mut lifecycle = ChatLifecycle::new(bus.clone());

        lifecycle.submit("a");
        lifecycle.submit("b");
        block_on(lifecycle.run_pending(&EchoBackend));

        let starts: Vec<u64> = bus
            .drain()
            .iter()
            .filter_map(|e| match e {
                ChatEvent::TurnStart { turn_id } => Some(*turn_id),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![1, 2]);
    }

    #[test]
    fn test_failure_recovers_for_next_submission() {
        let mut lifecycle = ChatLifecycle::new(EventBus::new());
        let backend = ScriptedBackend::new(vec![
            Err(ChatError::Backend("boom".to_string())),
            Ok("recovered".to_string()),
        ]);

        lifecycle.submit("a");
        block_on(lifecycle.run_pending(&backend));
        lifecycle.submit("b");
        block_on(lifecycle.run_pending(&backend));

        let entries = lifecycle.session().entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].text, FALLBACK_REPLY);
        assert_eq!(entries[3].text, "recovered");
        assert_eq!(lifecycle.last_outcome(), Some(TurnOutcome::Fulfilled));
    }

    // ─── Markdown Renderer Tests ─────────────────────────────

    #[test]
    fn test_render_heading_and_script_stripped() {
        let markup = markdown::render("# Hi\n\n<script>alert(1)</script>");
        assert!(markup.contains("<h1>"), "missing heading in: {}", markup);
        assert!(markup.contains("Hi"));
        assert!(!markup.contains("<script"), "script survived: {}", markup);
        assert!(!markup.contains("alert(1)"), "script body survived: {}", markup);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let markup = markdown::render("# Hi\n\n<script>alert(1)</script>");
        assert_eq!(markdown::sanitize(&markup), markup);
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = "**bold** and <em>inline</em>\n\n- a\n- b";
        assert_eq!(markdown::render(input), markdown::render(input));
    }

    #[test]
    fn test_render_single_newline_becomes_line_break() {
        let markup = markdown::render("line one\nline two");
        assert!(markup.contains("<br"), "missing line break in: {}", markup);
    }

    #[test]
    fn test_render_emphasis_and_code_span() {
        let markup = markdown::render("some *emphasis* and `code`");
        assert!(markup.contains("<em>emphasis</em>"));
        assert!(markup.contains("<code>code</code>"));
    }

    #[test]
    fn test_render_list() {
        let markup = markdown::render("- one\n- two");
        assert!(markup.contains("<ul>"));
        assert!(markup.contains("<li>one</li>"));
    }

    #[test]
    fn test_render_link_kept_javascript_scheme_dropped() {
        let markup = markdown::render("[ok](https://example.com) [bad](javascript:alert(1))");
        assert!(markup.contains("https://example.com"));
        assert!(!markup.contains("javascript:"), "js link survived: {}", markup);
    }

    #[test]
    fn test_render_event_handler_attribute_stripped() {
        let markup = markdown::render("<img src=\"x\" onerror=\"alert(1)\">");
        assert!(!markup.contains("onerror"), "handler survived: {}", markup);
    }

    #[test]
    fn test_render_gfm_table() {
        let markup = markdown::render("| a | b |\n| --- | --- |\n| 1 | 2 |");
        assert!(markup.contains("<table"), "missing table in: {}", markup);
    }

    #[test]
    fn test_render_gfm_strikethrough() {
        let markup = markdown::render("~~gone~~");
        assert!(markup.contains("<del>gone</del>"), "got: {}", markup);
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(markdown::render("").trim(), "");
    }

    // ─── Transcript Tests ────────────────────────────────────

    #[test]
    fn test_transcript_renders_both_senders() {
        use chat_types::message::Message;
        use chat_types::session::Session;

        let mut session = Session::new();
        session.append(Message::at("# Question", Sender::User, "10:00:00"));
        session.append(Message::at("An **answer**", Sender::Assistant, "10:00:05"));

        let html = transcript::to_html(&session);
        assert!(html.contains("class=\"entry user\""));
        assert!(html.contains("class=\"entry assistant\""));
        assert!(html.contains("<h1>Question</h1>"));
        assert!(html.contains("<strong>answer</strong>"));
        assert!(html.contains("10:00:00"));
    }

    #[test]
    fn test_transcript_sanitizes_message_bodies() {
        use chat_types::message::Message;
        use chat_types::session::Session;

        let mut session = Session::new();
        session.append(Message::at(
            "<script>alert(1)</script>",
            Sender::User,
            "10:00:00",
        ));

        let html = transcript::to_html(&session);
        assert!(!html.contains("<script>alert"));
    }
}
