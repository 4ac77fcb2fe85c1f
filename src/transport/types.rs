//! Operation and reply types for the generation backend

/// Which remote generation operation to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Produce the next exploratory question given history so far.
    NextQuestion,
    /// Produce the terminal narrative script given full history.
    FinalizeScript,
}

impl Operation {
    /// Path joined onto the backend base URL.
    pub fn endpoint_suffix(self) -> &'static str {
        match self {
            Operation::NextQuestion => "/get_next_question",
            Operation::FinalizeScript => "/generate_script",
        }
    }

    /// Short name for log fields.
    pub fn name(self) -> &'static str {
        match self {
            Operation::NextQuestion => "next_question",
            Operation::FinalizeScript => "generate_script",
        }
    }
}

/// Successful reply, decoded at the transport boundary per operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteReply {
    NextQuestion {
        /// The backend may report success without a question; the session
        /// controller substitutes the default follow-up prompt.
        next_question: Option<String>,
    },
    Script {
        script: String,
    },
}
