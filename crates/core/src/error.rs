//! Error types shared across the frontdesk crates

use thiserror::Error;

use crate::session::CallStatus;

/// Engine errors
///
/// All composition and session failures are returned as values. Escalation
/// decisions and "no scenario matched" are normal return values, never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required variable had neither a default nor a provided value.
    /// Recoverable: the caller can re-prompt for the missing values.
    #[error("missing required variables: {}", missing.join(", "))]
    MissingVariables { missing: Vec<String> },

    /// An explicitly named scenario does not exist in the configuration.
    /// Trigger-based lookup never produces this.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    /// No active configuration for the company. Surfaced to the caller as
    /// "assistant not configured", not a crash.
    #[error("no active configuration for company: {0}")]
    ConfigurationNotFound(String),

    /// Transcript append or status change attempted on a terminal session.
    #[error("invalid transition: session is already {current} and cannot accept {attempted}")]
    InvalidStateTransition {
        current: CallStatus,
        attempted: StateOperation,
    },

    /// Two variables with the same name in one configuration. Treated as a
    /// hard startup-time validation failure.
    #[error("duplicate variable name in configuration: {0}")]
    DuplicateVariable(String),

    /// Persisted session data violates an invariant (e.g. negative duration).
    #[error("corrupt session {id}: {reason}")]
    CorruptSession { id: String, reason: String },

    /// Session id not present in the registry.
    #[error("session not found: {0}")]
    SessionNotFound(String),
}

/// What was attempted on a session when a transition was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOperation {
    /// Appending a transcript entry
    TranscriptAppend,
    /// Moving to a new status
    StatusChange(CallStatus),
    /// Recording transfer metadata
    TransferAnnotation,
}

impl std::fmt::Display for StateOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateOperation::TranscriptAppend => write!(f, "a transcript append"),
            StateOperation::StatusChange(status) => write!(f, "a transition to {}", status),
            StateOperation::TransferAnnotation => write!(f, "a transfer annotation"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
