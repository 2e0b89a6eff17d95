//! Human escalation routing settings

use serde::{Deserialize, Serialize};

/// Keyword-driven escalation routing for a configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingSettings {
    /// Master switch; when false no trigger ever escalates
    #[serde(default)]
    pub allow_human_escalation: bool,
    /// Keywords matched case-insensitively as substrings of the caller's
    /// utterance
    #[serde(default)]
    pub escalation_triggers: Vec<String>,
    /// Department the call is routed to on escalation
    #[serde(default)]
    pub escalation_department: String,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            allow_human_escalation: false,
            escalation_triggers: Vec::new(),
            escalation_department: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_deserialization() {
        let yaml = r#"
allowHumanEscalation: true
escalationTriggers:
  - "speak to a manager"
  - "real person"
escalationDepartment: "customer care"
"#;
        let routing: RoutingSettings = serde_yaml::from_str(yaml).unwrap();
        assert!(routing.allow_human_escalation);
        assert_eq!(routing.escalation_triggers.len(), 2);
        assert_eq!(routing.escalation_department, "customer care");
    }

    #[test]
    fn test_routing_defaults_closed() {
        let routing: RoutingSettings = serde_yaml::from_str("{}").unwrap();
        assert!(!routing.allow_human_escalation);
        assert!(routing.escalation_triggers.is_empty());
    }
}
