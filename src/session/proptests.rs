//! Property-based tests for the session turn cycle
//!
//! These verify the pairing invariant: every confirmed user turn is followed
//! by exactly one assistant turn, whatever the backend does.

use super::*;
use crate::conversation::Role;
use crate::prompts::FALLBACK_PROMPT;
use crate::transport::testing::MockGenerationClient;
use crate::transport::{RemoteReply, TransportError};
use proptest::prelude::*;
use std::sync::Arc;

/// One simulated backend outcome for a turn cycle
#[derive(Debug, Clone)]
enum BackendOutcome {
    Question(String),
    NoQuestion,
    Failure,
}

fn arb_outcome() -> impl Strategy<Value = BackendOutcome> {
    prop_oneof![
        "[a-zA-Z0-9 ]{1,30}".prop_map(BackendOutcome::Question),
        Just(BackendOutcome::NoQuestion),
        Just(BackendOutcome::Failure),
    ]
}

// Leading alphanumeric keeps generated turns from being whitespace-only,
// which the normalizer rejects before any turn is committed.
fn arb_turns() -> impl Strategy<Value = Vec<(String, BackendOutcome)>> {
    prop::collection::vec(("[a-zA-Z0-9][a-zA-Z0-9 ]{0,39}", arb_outcome()), 0..8)
}

proptest! {
    #[test]
    fn prop_every_user_turn_gets_exactly_one_assistant_turn(turns in arb_turns()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let mock = Arc::new(MockGenerationClient::new());
            let mut session = Session::new(mock.clone());

            for (text, outcome) in &turns {
                match outcome {
                    BackendOutcome::Question(q) => mock.queue_reply(RemoteReply::NextQuestion {
                        next_question: Some(q.clone()),
                    }),
                    BackendOutcome::NoQuestion => mock.queue_reply(RemoteReply::NextQuestion {
                        next_question: None,
                    }),
                    BackendOutcome::Failure => {
                        mock.queue_error(TransportError::network("down"));
                    }
                }
                session.submit_typed(text).await.unwrap();
            }

            let snapshot = session.conversation().snapshot();
            // Seed plus one user/assistant pair per confirmed turn.
            prop_assert_eq!(snapshot.len(), 1 + 2 * turns.len());

            for (i, (text, outcome)) in turns.iter().enumerate() {
                let user = &snapshot[1 + 2 * i];
                let assistant = &snapshot[2 + 2 * i];
                prop_assert_eq!(user.role, Role::User);
                prop_assert_eq!(user.content.as_str(), text.as_str());
                prop_assert_eq!(assistant.role, Role::Assistant);
                if matches!(outcome, BackendOutcome::Failure) {
                    prop_assert_eq!(assistant.content.as_str(), FALLBACK_PROMPT);
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn prop_failed_finalize_never_mutates(turns in arb_turns()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let mock = Arc::new(MockGenerationClient::new());
            let mut session = Session::new(mock.clone());

            for (text, _) in &turns {
                mock.queue_reply(RemoteReply::NextQuestion { next_question: None });
                session.submit_typed(text).await.unwrap();
            }

            let before = session.conversation().clone();
            mock.queue_error(TransportError::remote("no script for you"));
            let result = session.finalize().await;

            prop_assert!(result.is_err());
            prop_assert_eq!(session.conversation(), &before);
            Ok(())
        })?;
    }
}
