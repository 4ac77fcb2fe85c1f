//! Mock generation client for testing
//!
//! Enables session-level tests without real I/O.

use super::{GenerationClient, Operation, RemoteReply, TransportError};
use crate::conversation::Turn;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock client that returns queued replies
pub struct MockGenerationClient {
    replies: Mutex<VecDeque<Result<RemoteReply, TransportError>>>,
    /// Record of every call: the serialized-order history and operation.
    pub calls: Mutex<Vec<(Vec<Turn>, Operation)>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, reply: RemoteReply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded calls
    pub fn recorded_calls(&self) -> Vec<(Vec<Turn>, Operation)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn call(
        &self,
        history: &[Turn],
        operation: Operation,
    ) -> Result<RemoteReply, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((history.to_vec(), operation));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("No mock reply queued")))
    }
}
