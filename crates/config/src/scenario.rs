//! Named scenarios
//!
//! A scenario is a triggerable sub-template for one conversational
//! situation, with its own required variables and optionally a link to a
//! different configuration for a sub-flow. Declaration order matters:
//! trigger matching returns the first scenario that matches.

use serde::{Deserialize, Serialize};

/// One named scenario within a configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique name within the configuration, matched case-sensitively
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Prompt template rendered when the scenario is selected
    #[serde(default)]
    pub prompt: String,
    /// Names of variables this scenario needs resolved
    #[serde(default)]
    pub required_variables: Vec<String>,
    /// Trigger phrases matched case-insensitively against the utterance
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Configuration handling the sub-flow, if any. The reference graph
    /// must stay acyclic; the validator checks this across a set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_config_id: Option<String>,
    /// Follow-up action identifiers executed by the surrounding system
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            prompt: prompt.into(),
            required_variables: Vec::new(),
            triggers: Vec::new(),
            linked_config_id: None,
            actions: Vec::new(),
        }
    }

    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_variables = variables.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any trigger is a case-insensitive substring of the utterance
    pub fn matches(&self, utterance: &str) -> bool {
        let lowered = utterance.to_lowercase();
        self.triggers
            .iter()
            .any(|t| !t.is_empty() && lowered.contains(&t.to_lowercase()))
    }
}
