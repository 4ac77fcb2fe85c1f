//! Session controller and per-client session lifecycle
//!
//! One [`Session`] owns one conversation and at most one pending input, and
//! drives the turn-taking cycle: confirmed user turn in, exactly one
//! assistant turn out (generated or fallback), plus on-demand finalization
//! into a script. [`SessionManager`] owns the connect/disconnect lifecycle.

mod controller;
mod error;
mod manager;

#[cfg(test)]
mod proptests;

pub use controller::{FollowUp, Session, MIN_TURNS_FOR_SCRIPT};
pub use error::SessionError;
pub use manager::SessionManager;
