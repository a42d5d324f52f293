//! Clipboard access through the OSC 52 terminal escape.

use std::io::Write;

use tracing::{debug, warn};

/// Result of a copy request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    /// Nothing is selected
    Empty,
    /// Output is not a terminal
    Unavailable,
    Failed(String),
}

impl ClipboardOutcome {
    pub fn message(&self) -> String {
        match self {
            ClipboardOutcome::Copied => "Text copied to clipboard.".to_string(),
            ClipboardOutcome::Empty => "Nothing to copy yet. Check a concept first.".to_string(),
            ClipboardOutcome::Unavailable => {
                "Clipboard is not available outside a terminal.".to_string()
            }
            ClipboardOutcome::Failed(reason) => format!("Copy failed: {reason}"),
        }
    }
}

/// Ask the terminal to put `text` on the system clipboard.
pub fn copy_to_clipboard(out: &mut impl Write, text: &str, is_tty: bool) -> ClipboardOutcome {
    if text.is_empty() {
        return ClipboardOutcome::Empty;
    }
    if !is_tty {
        return ClipboardOutcome::Unavailable;
    }

    let result = out
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|()| out.flush());
    match result {
        Ok(()) => {
            debug!(bytes = text.len(), "copied text via osc52");
            ClipboardOutcome::Copied
        }
        Err(err) => {
            warn!(error = %err, "clipboard write failed");
            ClipboardOutcome::Failed(err.to_string())
        }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_encodes_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
    }

    #[test]
    fn copy_writes_sequence_on_tty() {
        let mut out = Vec::new();
        let outcome = copy_to_clipboard(&mut out, "hi", true);
        assert_eq!(outcome, ClipboardOutcome::Copied);
        assert_eq!(String::from_utf8(out).unwrap(), osc52_sequence("hi"));
    }

    #[test]
    fn copy_skips_empty_text() {
        let mut out = Vec::new();
        assert_eq!(copy_to_clipboard(&mut out, "", true), ClipboardOutcome::Empty);
        assert!(out.is_empty());
    }

    #[test]
    fn copy_requires_terminal() {
        let mut out = Vec::new();
        assert_eq!(
            copy_to_clipboard(&mut out, "hi", false),
            ClipboardOutcome::Unavailable
        );
        assert!(out.is_empty());
    }

    #[test]
    fn failed_message_includes_reason() {
        let msg = ClipboardOutcome::Failed("broken pipe".into()).message();
        assert!(msg.contains("broken pipe"));
    }
}
