//! Markdown-to-sanitized-HTML rendering.
//!
//! `render` is the only path by which message text may reach a display
//! surface: markdown conversion followed by a sanitizing pass that strips
//! script elements, inline event handlers, `javascript:` links and any
//! disallowed tags. Raw HTML embedded in the input goes through the same
//! pass, so the output is safe to inject regardless of the input's origin.

use pulldown_cmark::{html, Event, Options, Parser};

/// Convert raw message text to sanitized HTML. Pure and deterministic;
/// never panics for any `&str` input.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Soft-break mode: a single newline becomes a line break, the way chat
    // input is usually meant.
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut markup = String::new();
    html::push_html(&mut markup, parser);
    sanitize(&markup)
}

/// Sanitize an HTML fragment. Idempotent: re-running on already-sanitized
/// output changes nothing.
pub fn sanitize(markup: &str) -> String {
    ammonia::clean(markup)
}
