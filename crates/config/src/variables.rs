//! Template variable declarations
//!
//! A configuration declares an ordered list of variables. Names are unique
//! within a configuration (enforced by the startup validator).

use serde::{Deserialize, Serialize};

/// One declared template variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    /// Placeholder name as it appears inside `{{name}}`
    pub name: String,
    /// Human-readable description for the dashboard
    #[serde(default)]
    pub description: String,
    /// Value used when the caller supplies none
    #[serde(default)]
    pub default_value: String,
    /// Whether resolution must fail when no value is available
    #[serde(default)]
    pub required: bool,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            default_value: String::new(),
            required: false,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
