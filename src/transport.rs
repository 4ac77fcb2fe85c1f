//! Remote generation transport
//!
//! One RPC-style call: serialized conversation history in, structured reply
//! or structured failure out. Exactly one attempt per call, no retry, no
//! caching; every call resends the full conversation snapshot.

mod client;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{serialize_history, GenerationClient, HttpGenerationClient};
pub use error::{TransportError, TransportErrorKind};
pub use types::{Operation, RemoteReply};
