//! # Clipboard
//!
//! The copy action writes a prompt's text verbatim to the system clipboard. Platform backends
//! live with the binary; this module only defines the [`Clipboard`] seam and the
//! [`FallbackClipboard`] combinator that retries with a secondary mechanism when the primary one
//! is unavailable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard {backend} unavailable: {message}")]
    Unavailable { backend: String, message: String },
    #[error("Failed to copy text: {primary}; fallback also failed: {fallback}")]
    Exhausted {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

impl ClipboardError {
    pub fn unavailable(backend: impl Into<String>, message: impl ToString) -> ClipboardError {
        ClipboardError::Unavailable {
            backend: backend.into(),
            message: message.to_string(),
        }
    }
}

pub trait Clipboard {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &str;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// Tries `primary` first and `fallback` only if the primary write failed.
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> FallbackClipboard<P, F> {
        FallbackClipboard { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let primary = match self.primary.set_text(text) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        log::warn!(
            "Failed to copy text with {}, falling back to {}: {}",
            self.primary.name(),
            self.fallback.name(),
            primary
        );

        self.fallback
            .set_text(text)
            .map_err(|fallback| ClipboardError::Exhausted {
                primary: Box::new(primary),
                fallback: Box::new(fallback),
            })
    }
}
