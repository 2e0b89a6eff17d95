//! Call session types: status state machine, transcript, transfer metadata
//!
//! A `CallSession` is the record of one phone interaction. Operations are
//! pure: they take a session by value and return the updated session, so
//! composition and testing never depend on shared mutable object identity.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{Error, Result, StateOperation};

/// Status of a call session
///
/// The kebab-case spellings are part of the persisted contract; existing
/// call records are already stored with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    /// Call created, not yet signalled
    #[default]
    Initiated,
    /// Outbound leg is ringing
    Ringing,
    /// Caller and assistant are connected
    InProgress,
    /// Call ended normally
    Completed,
    /// Call ended with a provider error
    Failed,
    /// Callee line was busy
    Busy,
    /// Callee never picked up
    NoAnswer,
    /// Call was canceled before connecting
    Canceled,
}

/// Allowed forward transitions per status. Terminal statuses map to the
/// empty slice, so any transition out of them is rejected.
static STATUS_TRANSITIONS: Lazy<HashMap<CallStatus, &'static [CallStatus]>> = Lazy::new(|| {
    use CallStatus::*;
    let mut map = HashMap::new();
    map.insert(
        Initiated,
        &[Ringing, InProgress, Completed, Failed, Busy, NoAnswer, Canceled] as &[_],
    );
    map.insert(
        Ringing,
        &[InProgress, Completed, Failed, Busy, NoAnswer, Canceled] as &[_],
    );
    map.insert(InProgress, &[Completed, Failed, Canceled] as &[_]);
    map.insert(Completed, &[] as &[_]);
    map.insert(Failed, &[] as &[_]);
    map.insert(Busy, &[] as &[_]);
    map.insert(NoAnswer, &[] as &[_]);
    map.insert(Canceled, &[] as &[_]);
    map
});

impl CallStatus {
    /// Statuses after which a session accepts no further mutation
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CallStatus::Completed
                | CallStatus::Failed
                | CallStatus::Busy
                | CallStatus::NoAnswer
                | CallStatus::Canceled
        )
    }

    /// Get allowed transitions from the current status
    pub fn allowed_transitions(&self) -> &'static [CallStatus] {
        STATUS_TRANSITIONS.get(self).copied().unwrap_or(&[])
    }

    /// Check if a transition to the target status is allowed
    pub fn can_transition_to(&self, target: CallStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Initiated => "initiated",
            CallStatus::Ringing => "ringing",
            CallStatus::InProgress => "in-progress",
            CallStatus::Completed => "completed",
            CallStatus::Failed => "failed",
            CallStatus::Busy => "busy",
            CallStatus::NoAnswer => "no-answer",
            CallStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who spoke a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// Composed assistant output
    System,
    /// The person on the phone
    Caller,
    /// A human agent after transfer
    Agent,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::System => "system",
            Speaker::Caller => "caller",
            Speaker::Agent => "agent",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One spoken turn in the call transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a caller turn
    pub fn caller(text: impl Into<String>) -> Self {
        Self::new(Speaker::Caller, text)
    }

    /// Create a system (assistant) turn
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Speaker::System, text)
    }

    /// Create a human-agent turn
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text)
    }
}

/// Sentiment label attached by the external analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

/// Sentiment of the conversation, computed externally and attached to the
/// session. The engine never computes this itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Score in [-1, 1]
    pub score: f32,
    pub label: SentimentLabel,
}

/// Record of one phone interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSession {
    /// Session id
    pub id: String,
    /// Owning company
    pub company_id: String,
    /// Caller phone number, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_number: Option<String>,
    /// Telephony provider call reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: CallStatus,
    /// Append-only ordered transcript
    #[serde(default)]
    pub conversation: Vec<TranscriptEntry>,
    /// Externally attached sentiment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Department the call was handed to, if a transfer happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferred_to: Option<String>,
    /// When the transfer happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferred_at: Option<DateTime<Utc>>,
    /// When the call started
    pub started_at: DateTime<Utc>,
    /// When the call reached a terminal status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl CallSession {
    /// Create a new session in `initiated` status
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company_id: company_id.into(),
            caller_number: None,
            external_ref: None,
            status: CallStatus::Initiated,
            conversation: Vec::new(),
            sentiment: None,
            transferred_to: None,
            transferred_at: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn with_caller_number(mut self, number: impl Into<String>) -> Self {
        self.caller_number = Some(number.into());
        self
    }

    pub fn with_external_ref(mut self, external_ref: impl Into<String>) -> Self {
        self.external_ref = Some(external_ref.into());
        self
    }

    /// Append a transcript entry, preserving insertion order.
    ///
    /// Fails once the session is in a terminal status; transcripts are never
    /// extended after the call has ended.
    pub fn append_transcript(mut self, speaker: Speaker, text: impl Into<String>) -> Result<Self> {
        if self.status.is_terminal() {
            return Err(Error::InvalidStateTransition {
                current: self.status,
                attempted: StateOperation::TranscriptAppend,
            });
        }
        self.conversation.push(TranscriptEntry::new(speaker, text));
        Ok(self)
    }

    /// Move the session to a new status.
    ///
    /// Transitions are monotonic forward. A transition to the current status
    /// is a no-op success; any transition out of a terminal status fails.
    /// Reaching a terminal status records `ended_at`.
    pub fn transition(mut self, new_status: CallStatus) -> Result<Self> {
        if new_status == self.status {
            return Ok(self);
        }
        if !self.status.can_transition_to(new_status) {
            return Err(Error::InvalidStateTransition {
                current: self.status,
                attempted: StateOperation::StatusChange(new_status),
            });
        }
        tracing::info!(session = %self.id, from = %self.status, to = %new_status, "call status change");
        self.status = new_status;
        if new_status.is_terminal() && self.ended_at.is_none() {
            self.ended_at = Some(Utc::now());
        }
        Ok(self)
    }

    /// Record a transfer annotation.
    ///
    /// This does not change the status: a session can be `in-progress` and
    /// carry transfer metadata at the same time. Rejected on terminal
    /// sessions.
    pub fn with_transfer(mut self, department: impl Into<String>) -> Result<Self> {
        if self.status.is_terminal() {
            return Err(Error::InvalidStateTransition {
                current: self.status,
                attempted: StateOperation::TransferAnnotation,
            });
        }
        self.transferred_to = Some(department.into());
        self.transferred_at = Some(Utc::now());
        Ok(self)
    }

    /// Attach externally computed sentiment
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Whether the call was handed to a human
    pub fn was_transferred(&self) -> bool {
        self.transferred_to.is_some()
    }

    /// Duration in whole seconds, derived from the start/end timestamps.
    ///
    /// `None` while the call is still open. A negative span means the
    /// persisted record is corrupt and is reported as such, never clamped.
    pub fn duration_seconds(&self) -> Result<Option<i64>> {
        let Some(ended_at) = self.ended_at else {
            return Ok(None);
        };
        let seconds = (ended_at - self.started_at).num_seconds();
        if seconds < 0 {
            return Err(Error::CorruptSession {
                id: self.id.clone(),
                reason: format!("negative duration: {}s", seconds),
            });
        }
        Ok(Some(seconds))
    }
}
