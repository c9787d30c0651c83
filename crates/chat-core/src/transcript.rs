//! HTML transcript export.
//!
//! Produces a standalone document in which every message body is the
//! markdown renderer's sanitized output, with sender and timestamp exposed
//! for layout (user entries right-aligned, assistant entries left-aligned).

use chat_types::message::Sender;
use chat_types::session::Session;

use crate::markdown;

const STYLE: &str = "\
body { font-family: sans-serif; background: #f4f4f5; margin: 0; padding: 24px; }
.entry { display: flex; flex-direction: column; margin-bottom: 16px; }
.entry.user { align-items: flex-end; }
.entry.assistant { align-items: flex-start; }
.bubble { max-width: 60%; padding: 10px 14px; border-radius: 14px; }
.entry.user .bubble { background: #2563eb; color: #ffffff; }
.entry.assistant .bubble { background: #ffffff; color: #27272a; }
.timestamp { font-size: 11px; color: #71717a; margin-top: 4px; }
";

/// Render the whole session as a self-contained HTML document.
pub fn to_html(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Chat transcript</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");

    for entry in session.entries() {
        let class = match entry.sender {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        };
        out.push_str(&format!(
            "<div class=\"entry {}\">\n<div class=\"bubble\">{}</div>\n\
             <span class=\"timestamp\">{}</span>\n</div>\n",
            class,
            markdown::render(&entry.text),
            ammonia::clean_text(&entry.timestamp),
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}
