//! Per-client session lifecycle
//!
//! Sessions are created at connect and disposed at disconnect; there is no
//! process-wide mutable conversation state. Each session sits behind its own
//! async lock, so all conversation mutations and remote calls for one
//! session run one at a time while independent sessions stay fully isolated.

use super::Session;
use crate::transport::GenerationClient;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type SharedSession = Arc<tokio::sync::Mutex<Session>>;

/// Owner of all live sessions for one process
pub struct SessionManager {
    client: Arc<dyn GenerationClient>,
    sessions: Mutex<HashMap<Uuid, SharedSession>>,
}

impl SessionManager {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Create a session for a newly connected client.
    pub fn connect(&self) -> (Uuid, SharedSession) {
        let session = Session::new(self.client.clone());
        let id = session.id();
        let shared = Arc::new(tokio::sync::Mutex::new(session));
        self.sessions.lock().unwrap().insert(id, shared.clone());
        tracing::info!(session_id = %id, "Session created");
        (id, shared)
    }

    /// Look up a live session.
    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.lock().unwrap().get(&id).cloned()
    }

    /// Dispose of a session at disconnect. Returns false if it was not live.
    pub fn disconnect(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().unwrap().remove(&id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Session disposed");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}
