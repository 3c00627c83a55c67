//! Semantic styling helpers for terminal output
//!
//! Thin wrappers over `owo-colors` with stream-aware color detection
//! (respects `NO_COLOR` and TTY detection) and clickable links where the
//! terminal supports them.

use owo_colors::{OwoColorize, Stream};
use terminal_link::Link;

/// Green check mark for completed steps
pub fn check() -> String {
    "✓".if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Yellow dot for submissions waiting on confirmation
pub fn pending_dot() -> String {
    "●".if_supports_color(Stream::Stdout, |t| t.yellow())
        .to_string()
}

/// Bold emphasis for names and headers
pub fn emphasis(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}

/// Dim secondary text
pub fn muted(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

/// Yellow warning text
pub fn warn(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.yellow())
        .to_string()
}

/// Red error label for stderr
pub fn error_label() -> String {
    "error"
        .if_supports_color(Stream::Stderr, |t| t.red())
        .to_string()
}

/// Render a clickable link when the terminal supports it, plain URL otherwise
pub fn hyperlink(text: &str, url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        Link::new(text, url).to_string()
    } else {
        url.to_string()
    }
}
