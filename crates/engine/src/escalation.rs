//! Keyword-driven escalation detection
//!
//! Deliberately simple: case-insensitive substring matching, no semantics.
//! The decision is a normal return value, never an error, and is evaluated
//! independently of scenario matching.

use serde::{Deserialize, Serialize};

use frontdesk_config::RoutingSettings;

/// Outcome of scanning one caller utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationDecision {
    pub escalate: bool,
    /// Target department; empty when not escalating
    pub department: String,
    /// The trigger that fired, for the call log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_trigger: Option<String>,
}

impl EscalationDecision {
    pub fn none() -> Self {
        Self {
            escalate: false,
            department: String::new(),
            matched_trigger: None,
        }
    }
}

/// Scan the latest caller utterance against the configured triggers.
///
/// With `allow_human_escalation` off this always returns "no escalation",
/// regardless of trigger content.
pub fn detect_escalation(routing: &RoutingSettings, utterance: &str) -> EscalationDecision {
    if !routing.allow_human_escalation {
        return EscalationDecision::none();
    }

    let lowered = utterance.to_lowercase();
    let hit = routing
        .escalation_triggers
        .iter()
        .find(|trigger| !trigger.is_empty() && lowered.contains(&trigger.to_lowercase()));

    match hit {
        Some(trigger) => {
            tracing::debug!(trigger = %trigger, department = %routing.escalation_department, "escalation trigger matched");
            EscalationDecision {
                escalate: true,
                department: routing.escalation_department.clone(),
                matched_trigger: Some(trigger.clone()),
            }
        }
        None => EscalationDecision::none(),
    }
}
