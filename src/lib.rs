//! Storybrew - conversation session core for the story-brewing service
//!
//! Turns a sequence of user utterances (voice-transcribed or typed) into a
//! multi-turn conversation with a remote generation backend, ultimately
//! producing a single short-form narrative script.
//!
//! The crate covers the session state machine and remote-call orchestration:
//! the presentation layer and the speech-to-text subsystem are callers, the
//! generation backend sits behind [`transport::GenerationClient`].

pub mod config;
pub mod conversation;
pub mod normalizer;
pub mod prompts;
pub mod session;
pub mod transport;

pub use config::BackendConfig;
pub use conversation::{Conversation, Role, Turn};
pub use normalizer::{InputError, PendingInput, TranscriptionCapture, TurnNormalizer};
pub use session::{FollowUp, Session, SessionError, SessionManager};
pub use transport::{GenerationClient, HttpGenerationClient, Operation, RemoteReply, TransportError};
