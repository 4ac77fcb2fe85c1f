//! Session error types

use crate::normalizer::InputError;
use crate::transport::TransportError;
use thiserror::Error;

/// Errors surfaced to the presentation layer by a session.
///
/// None of these are fatal: every variant leaves the session usable and the
/// conversation unmodified.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Finalize requested before the minimum exchange depth. No remote call
    /// was made.
    #[error("not enough conversation yet ({turns} turns); share a bit more of the story first")]
    NotEnoughContext { turns: usize },

    /// Staging/confirmation rejected the input before any remote call.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Finalize-time transport failure, surfaced verbatim for display and
    /// retry. Follow-up-time transport failures are absorbed into the
    /// fallback turn instead and never appear here.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
