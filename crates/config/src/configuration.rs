//! The conversation configuration aggregate

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ai::AiSettings;
use crate::conversation::{ConversationType, FormalityLevel, IndustryType};
use crate::routing::RoutingSettings;
use crate::scenario::Scenario;
use crate::variables::VariableDefinition;
use crate::ConfigError;

/// The set of rules and templates governing how an assistant composes
/// responses for one company/use-case.
///
/// Owned by exactly one company; scenarios may reference other
/// configurations by id for sub-flows (the graph must stay acyclic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationConfiguration {
    /// Stable identifier, referenced by `Scenario::linked_config_id`
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conversation_type: ConversationType,
    #[serde(default)]
    pub industry_type: IndustryType,
    #[serde(default)]
    pub formality_level: FormalityLevel,
    /// Ordered variable declarations; names unique within the configuration
    #[serde(default)]
    pub variables: Vec<VariableDefinition>,
    #[serde(default)]
    pub ai_settings: AiSettings,
    #[serde(default)]
    pub routing_settings: RoutingSettings,
    /// Ordered scenarios; trigger matching walks this in declaration order
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    /// Only one configuration per company is active at composition time;
    /// selecting which one is an external concern.
    #[serde(default)]
    pub active: bool,
}

impl ConversationConfiguration {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            conversation_type: ConversationType::default(),
            industry_type: IndustryType::default(),
            formality_level: FormalityLevel::default(),
            variables: Vec::new(),
            ai_settings: AiSettings::default(),
            routing_settings: RoutingSettings::default(),
            scenarios: Vec::new(),
            active: false,
        }
    }

    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path.as_ref().display().to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Look up a declared variable by name
    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Look up a scenario by exact, case-sensitive name
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Names of all scenarios in declaration order
    pub fn scenario_names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::PersonalityTrait;

    #[test]
    fn test_configuration_deserialization() {
        let yaml = r#"
id: cfg-main
name: "Main sales line"
conversationType: sales
industryType: retail
formalityLevel: professional
variables:
  - name: company
    required: true
  - name: discount
    defaultValue: "10%"
aiSettings:
  personalityTrait: friendly
  communicationStyle: concise
routingSettings:
  allowHumanEscalation: true
  escalationTriggers: ["manager"]
  escalationDepartment: "sales desk"
scenarios:
  - name: refund_request
    prompt: "Handle the refund."
    triggers: ["refund"]
active: true
"#;
        let config: ConversationConfiguration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.conversation_type, ConversationType::Sales);
        assert_eq!(config.industry_type, IndustryType::Retail);
        assert_eq!(config.ai_settings.personality_trait, PersonalityTrait::Friendly);
        assert!(config.active);
        assert!(config.variable("discount").is_some());
        assert!(config.scenario("refund_request").is_some());
        assert!(config.scenario("Refund_Request").is_none()); // case-sensitive
    }

    #[test]
    fn test_configuration_minimal() {
        let config: ConversationConfiguration = serde_yaml::from_str("id: cfg-1").unwrap();
        assert_eq!(config.conversation_type, ConversationType::Custom);
        assert!(!config.ai_settings.has_custom_template());
        assert!(config.scenarios.is_empty());
    }
}
