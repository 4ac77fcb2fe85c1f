//! Conversation store: the ordered, append-only log of turns
//!
//! One [`Conversation`] is owned by exactly one session and is the sole
//! source of truth serialized for remote generation calls.

use serde::{Deserialize, Serialize};

/// Author of a committed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One committed, immutable contribution to a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered append-only sequence of turns for one session.
///
/// The first committed turn is always the assistant opening prompt, inserted
/// once at creation. Turns are never reordered or deleted; well-formed
/// user/assistant alternation is the session controller's job, not enforced
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create a conversation seeded with the assistant opening prompt.
    pub fn seeded(opening_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::assistant(opening_prompt)],
        }
    }

    /// Append a committed turn. Infallible, preserves insertion order.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Full ordered view of all committed turns, reflecting every append
    /// made before the call.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    /// Count of committed turns, used to gate finalize readiness.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
