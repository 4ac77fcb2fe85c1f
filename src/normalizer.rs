//! Turn normalizer: reconciles speech transcription and typed fallback
//!
//! Per interaction cycle the normalizer produces exactly one finalized
//! user-authored string (or none). A transcription result is staged for
//! confirmation and may be edited in place; typed fallback input is only
//! accepted while nothing is awaiting confirmation, so a stray typed
//! submission can never race an unconfirmed transcription.

use crate::prompts::TRANSCRIPTION_FAILED_PLACEHOLDER;
use thiserror::Error;

/// What the speech capture collaborator produced for one capture action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionCapture {
    /// Transcription succeeded with this text.
    Text(String),
    /// Audio was captured but no transcription came back.
    AudioOnly,
}

/// Unconfirmed candidate text awaiting promotion into a committed turn.
///
/// At most one instance is live per session. It is destroyed either by
/// confirmation or by being replaced with a new capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingInput {
    #[default]
    Empty,
    AwaitingConfirmation {
        text: String,
        /// False when the text is the failed-transcription placeholder, so
        /// the caller can warn the user before they edit and confirm.
        transcribed: bool,
    },
}

impl PendingInput {
    pub fn is_empty(&self) -> bool {
        matches!(self, PendingInput::Empty)
    }

    /// Currently staged text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            PendingInput::Empty => None,
            PendingInput::AwaitingConfirmation { text, .. } => Some(text),
        }
    }

    /// True when the staged text is a placeholder for a failed transcription
    /// and the caller should prompt the user to edit it.
    pub fn needs_warning(&self) -> bool {
        matches!(
            self,
            PendingInput::AwaitingConfirmation {
                transcribed: false,
                ..
            }
        )
    }
}

/// Errors from staging, editing, and confirming input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no input is awaiting confirmation")]
    NothingPending,
    #[error("a transcription is awaiting confirmation; confirm or clear it first")]
    InputPending,
    #[error("confirmed input is empty")]
    EmptyTurn,
}

/// State machine producing one confirmed user string per interaction cycle
#[derive(Debug, Default)]
pub struct TurnNormalizer {
    pending: PendingInput,
}

impl TurnNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    /// Stage a capture result for confirmation, replacing anything staged.
    ///
    /// A successful transcription stages its text verbatim; captured-but-
    /// untranscribed audio stages an editable placeholder flagged for a
    /// user-facing warning. An empty transcription is treated the same as
    /// untranscribed audio.
    pub fn capture(&mut self, capture: TranscriptionCapture) {
        self.pending = match capture {
            TranscriptionCapture::Text(text) if !text.trim().is_empty() => {
                PendingInput::AwaitingConfirmation {
                    text,
                    transcribed: true,
                }
            }
            TranscriptionCapture::Text(_) | TranscriptionCapture::AudioOnly => {
                PendingInput::AwaitingConfirmation {
                    text: TRANSCRIPTION_FAILED_PLACEHOLDER.to_string(),
                    transcribed: false,
                }
            }
        };
    }

    /// Update the staged text in place. No turn is created.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<(), InputError> {
        match &mut self.pending {
            PendingInput::Empty => Err(InputError::NothingPending),
            PendingInput::AwaitingConfirmation { text: staged, .. } => {
                *staged = text.into();
                Ok(())
            }
        }
    }

    /// Promote the staged text verbatim into a confirmed user string.
    ///
    /// This is the only path by which a transcription-origin turn is
    /// committed. Empty or whitespace-only text is rejected and stays
    /// staged so the user can edit it.
    pub fn confirm(&mut self) -> Result<String, InputError> {
        match &self.pending {
            PendingInput::Empty => Err(InputError::NothingPending),
            PendingInput::AwaitingConfirmation { text, .. } => {
                if text.trim().is_empty() {
                    return Err(InputError::EmptyTurn);
                }
                let text = text.clone();
                self.pending = PendingInput::Empty;
                Ok(text)
            }
        }
    }

    /// Accept a typed-fallback submission as a confirmed user string.
    ///
    /// Rejected while a transcription is awaiting confirmation.
    pub fn typed(&self, text: &str) -> Result<String, InputError> {
        if !self.pending.is_empty() {
            return Err(InputError::InputPending);
        }
        if text.trim().is_empty() {
            return Err(InputError::EmptyTurn);
        }
        Ok(text.to_string())
    }

    /// Discard any staged text.
    pub fn clear(&mut self) {
        self.pending = PendingInput::Empty;
    }
}
