//! Scenario selection
//!
//! Two lookup paths over a configuration's scenarios: exact case-sensitive
//! name (explicit invocation, fails for an unknown name) and trigger
//! matching (first declared scenario with a case-insensitive substring hit;
//! never fails, just returns no scenario).

use std::collections::HashMap;

use frontdesk_config::{ConversationConfiguration, Scenario};
use frontdesk_core::{Error, Result};

use crate::template::render_template;
use crate::variables::merge_variables;

/// Scenario lookup over one configuration
pub struct ScenarioCatalog<'a> {
    config: &'a ConversationConfiguration,
}

impl<'a> ScenarioCatalog<'a> {
    pub fn new(config: &'a ConversationConfiguration) -> Self {
        Self { config }
    }

    /// Exact-name lookup for explicit scenario invocation
    pub fn by_name(&self, name: &str) -> Result<&'a Scenario> {
        self.config
            .scenario(name)
            .ok_or_else(|| Error::UnknownScenario(name.to_string()))
    }

    /// First scenario in declaration order whose triggers match.
    ///
    /// Ties between overlapping triggers are resolved by declaration order,
    /// not by specificity.
    pub fn match_utterance(&self, utterance: &str) -> Option<&'a Scenario> {
        let hit = self.config.scenarios.iter().find(|s| s.matches(utterance));
        if let Some(scenario) = hit {
            tracing::debug!(scenario = %scenario.name, "scenario trigger matched");
        }
        hit
    }

    /// Select a scenario by explicit name or by utterance triggers.
    ///
    /// An explicit name that does not exist is the only failure mode;
    /// trigger lookup falling through returns `Ok(None)` and the caller
    /// falls back to the base system prompt.
    pub fn select(
        &self,
        name: Option<&str>,
        utterance: Option<&str>,
    ) -> Result<Option<&'a Scenario>> {
        if let Some(name) = name {
            return self.by_name(name).map(Some);
        }
        Ok(utterance.and_then(|u| self.match_utterance(u)))
    }
}

/// Convenience wrapper over [`ScenarioCatalog::select`]
pub fn match_scenario<'a>(
    config: &'a ConversationConfiguration,
    name: Option<&str>,
    utterance: Option<&str>,
) -> Result<Option<&'a Scenario>> {
    ScenarioCatalog::new(config).select(name, utterance)
}

/// Render a scenario's prompt.
///
/// The scenario's required variables must resolve to non-empty values from
/// the configuration defaults and the provided map; anything else in the
/// template falls back to verbatim pass-through.
pub fn scenario_prompt(
    config: &ConversationConfiguration,
    scenario: &Scenario,
    provided: &HashMap<String, String>,
) -> Result<String> {
    let merged = merge_variables(&config.variables, provided);
    let missing: Vec<String> = scenario
        .required_variables
        .iter()
        .filter(|name| merged.get(*name).map_or(true, |value| value.is_empty()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingVariables { missing });
    }
    Ok(render_template(&scenario.prompt, &merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_config::VariableDefinition;

    fn config_with_scenarios() -> ConversationConfiguration {
        let mut config = ConversationConfiguration::new("cfg-1");
        config.variables = vec![VariableDefinition::new("orderId")];
        config.scenarios = vec![
            Scenario::new("refund_request", "Refund order {{orderId}}.")
                .with_triggers(["refund"])
                .with_required_variables(["orderId"]),
            Scenario::new("complaint", "Log the complaint.").with_triggers(["refund", "complaint"]),
        ];
        config
    }

    #[test]
    fn test_explicit_name_lookup() {
        let config = config_with_scenarios();
        let catalog = ScenarioCatalog::new(&config);
        assert_eq!(catalog.by_name("complaint").unwrap().name, "complaint");
        assert!(matches!(
            catalog.by_name("missing"),
            Err(Error::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_declaration_order_wins_on_overlap() {
        let config = config_with_scenarios();
        let catalog = ScenarioCatalog::new(&config);
        // Matches both scenarios' triggers; first declared wins.
        let hit = catalog
            .match_utterance("I have a complaint about my refund")
            .unwrap();
        assert_eq!(hit.name, "refund_request");
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let config = config_with_scenarios();
        let selected = match_scenario(&config, None, Some("what are your hours")).unwrap();
        assert!(selected.is_none());

        let selected = match_scenario(&config, None, None).unwrap();
        assert!(selected.is_none());
    }

    #[test]
    fn test_scenario_prompt_requires_variables() {
        let config = config_with_scenarios();
        let scenario = config.scenario("refund_request").unwrap();

        let err = scenario_prompt(&config, scenario, &HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::MissingVariables { missing } if missing == vec!["orderId"]));

        let provided: HashMap<String, String> =
            [("orderId".to_string(), "A-1001".to_string())].into();
        let prompt = scenario_prompt(&config, scenario, &provided).unwrap();
        assert_eq!(prompt, "Refund order A-1001.");
    }
}
