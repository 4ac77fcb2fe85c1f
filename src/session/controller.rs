//! The per-session orchestration core

use super::SessionError;
use crate::conversation::{Conversation, Turn};
use crate::normalizer::{InputError, PendingInput, TranscriptionCapture, TurnNormalizer};
use crate::prompts::{DEFAULT_FOLLOW_UP, FALLBACK_PROMPT, STARTER_PROMPT};
use crate::transport::{GenerationClient, Operation, RemoteReply, TransportError};
use std::sync::Arc;
use uuid::Uuid;

/// Minimum committed turns (seed included) before a script can be brewed:
/// the opening prompt plus at least one full user/assistant exchange.
pub const MIN_TURNS_FOR_SCRIPT: usize = 3;

/// The assistant turn appended after a confirmed user turn
#[derive(Debug)]
pub enum FollowUp {
    /// Backend-generated question (or the default prompt when the backend
    /// succeeded without one).
    Generated(String),
    /// Transport failed; the fixed fallback was appended so the conversation
    /// keeps moving. The error is carried for display only.
    Fallback { error: TransportError },
}

impl FollowUp {
    /// The text that was appended to the conversation.
    pub fn text(&self) -> &str {
        match self {
            FollowUp::Generated(text) => text,
            FollowUp::Fallback { .. } => FALLBACK_PROMPT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FollowUp::Fallback { .. })
    }
}

/// One user's interactive session: one conversation, at most one pending
/// input, one generation client.
///
/// All methods take `&mut self`, so operations on one session are serialized
/// by construction; each remote call reads a snapshot and appends based on
/// it, and no second call can interleave.
pub struct Session {
    id: Uuid,
    conversation: Conversation,
    normalizer: TurnNormalizer,
    client: Arc<dyn GenerationClient>,
}

impl Session {
    /// Create a session with its conversation seeded with the opening prompt.
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation: Conversation::seeded(STARTER_PROMPT),
            normalizer: TurnNormalizer::new(),
            client,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn pending(&self) -> &PendingInput {
        self.normalizer.pending()
    }

    /// Stage a speech capture result for confirmation, replacing anything
    /// already staged.
    pub fn capture_transcription(&mut self, capture: TranscriptionCapture) {
        self.normalizer.capture(capture);
    }

    /// Edit the staged text in place.
    pub fn edit_pending(&mut self, text: impl Into<String>) -> Result<(), InputError> {
        self.normalizer.edit(text)
    }

    /// Discard any staged text.
    pub fn clear_pending(&mut self) {
        self.normalizer.clear();
    }

    /// Confirm the staged transcription and run one turn cycle.
    pub async fn confirm_pending(&mut self) -> Result<FollowUp, SessionError> {
        let text = self.normalizer.confirm()?;
        Ok(self.take_turn(text).await)
    }

    /// Submit a typed-fallback turn and run one turn cycle.
    ///
    /// Rejected while a transcription is awaiting confirmation.
    pub async fn submit_typed(&mut self, text: &str) -> Result<FollowUp, SessionError> {
        let text = self.normalizer.typed(text)?;
        Ok(self.take_turn(text).await)
    }

    /// Append the user turn, ask the backend for a follow-up question over
    /// the full snapshot, and append exactly one assistant turn.
    ///
    /// A transport failure is absorbed here: the fixed fallback prompt is
    /// appended instead and the error is only carried back for display, so
    /// the session never stalls on a dead backend.
    async fn take_turn(&mut self, text: String) -> FollowUp {
        self.conversation.push(Turn::user(text));

        let result = self
            .client
            .call(self.conversation.snapshot(), Operation::NextQuestion)
            .await;

        let follow_up = match result {
            Ok(RemoteReply::NextQuestion { next_question }) => {
                FollowUp::Generated(next_question.unwrap_or_else(|| DEFAULT_FOLLOW_UP.to_string()))
            }
            Ok(RemoteReply::Script { .. }) => {
                // Wrong reply shape for this operation; treat like any other
                // transport failure.
                let error =
                    TransportError::malformed("Got a script reply to a next-question request");
                tracing::warn!(session_id = %self.id, "Unexpected reply shape, using fallback");
                FollowUp::Fallback { error }
            }
            Err(error) => {
                tracing::warn!(
                    session_id = %self.id,
                    error = %error,
                    "Follow-up generation failed, appending fallback prompt"
                );
                FollowUp::Fallback { error }
            }
        };

        self.conversation.push(Turn::assistant(follow_up.text()));
        follow_up
    }

    /// Generate the final script from the full conversation.
    ///
    /// Requires at least one full exchange beyond the opening prompt; checked
    /// before any remote call. The conversation is never modified here, so a
    /// failed finalize can be retried after the user adds more detail, and
    /// the session stays open even after a successful one.
    pub async fn finalize(&mut self) -> Result<String, SessionError> {
        let turns = self.conversation.len();
        if turns < MIN_TURNS_FOR_SCRIPT {
            tracing::debug!(session_id = %self.id, turns, "Finalize rejected, not enough context");
            return Err(SessionError::NotEnoughContext { turns });
        }

        let reply = self
            .client
            .call(self.conversation.snapshot(), Operation::FinalizeScript)
            .await?;

        match reply {
            RemoteReply::Script { script } => {
                tracing::info!(session_id = %self.id, turns, "Script generated");
                Ok(script)
            }
            RemoteReply::NextQuestion { .. } => Err(SessionError::Transport(
                TransportError::malformed("Got a next-question reply to a script request"),
            )),
        }
    }
}
