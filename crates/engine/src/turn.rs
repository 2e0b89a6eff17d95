//! Turn planning
//!
//! One caller utterance can simultaneously match a custom keyword response,
//! select a scenario, and trigger escalation. `plan_turn` fixes the
//! precedence: the business-hours gate short-circuits everything, then
//! escalation wins over any composed response, then custom keyword
//! responses, then scenarios, then the base system prompt. Degradable
//! failures (unknown explicit scenario, unresolved scenario variables) fall
//! back to the base prompt so the assistant stays responsive.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use frontdesk_config::ConfigurationContext;
use frontdesk_core::Error;

use crate::composer::{compose_system_prompt, transfer_message};
use crate::escalation::{detect_escalation, EscalationDecision};
use crate::scenario::{scenario_prompt, ScenarioCatalog};

/// What the surrounding system should do with this turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnPlan {
    /// Outside business hours; play the closed message and end
    Closed { message: String },
    /// Route to a human, announcing the transfer
    Escalate {
        decision: EscalationDecision,
        announcement: String,
    },
    /// Canned keyword response; no model call needed
    CannedResponse { response: String },
    /// Scenario prompt for the model
    ScenarioPrompt { scenario: String, prompt: String },
    /// Base system prompt for the model
    Prompt { prompt: String },
}

/// Plan one conversation turn from the loaded context and the caller's
/// utterance. Total: every input produces a plan.
pub fn plan_turn(
    context: &ConfigurationContext,
    utterance: &str,
    explicit_scenario: Option<&str>,
    provided: &HashMap<String, String>,
    now: DateTime<Utc>,
) -> TurnPlan {
    if !context.business_hours.is_open_at(now) {
        return TurnPlan::Closed {
            message: context.business_hours.closed_message.clone(),
        };
    }

    let decision = detect_escalation(&context.configuration.routing_settings, utterance);
    if decision.escalate {
        let announcement = transfer_message(context, &decision.department);
        return TurnPlan::Escalate {
            decision,
            announcement,
        };
    }

    if let Some(hit) = context.custom_responses.iter().find(|r| r.matches(utterance)) {
        return TurnPlan::CannedResponse {
            response: hit.response.clone(),
        };
    }

    let catalog = ScenarioCatalog::new(&context.configuration);
    let selected = match catalog.select(explicit_scenario, Some(utterance)) {
        Ok(selected) => selected,
        Err(Error::UnknownScenario(name)) => {
            // Configuration bug; degrade to the base prompt.
            tracing::warn!(scenario = %name, "explicit scenario not found, using base prompt");
            None
        }
        Err(_) => None,
    };

    if let Some(scenario) = selected {
        match scenario_prompt(&context.configuration, scenario, provided) {
            Ok(prompt) => {
                return TurnPlan::ScenarioPrompt {
                    scenario: scenario.name.clone(),
                    prompt,
                };
            }
            Err(Error::MissingVariables { missing }) => {
                tracing::warn!(scenario = %scenario.name, ?missing, "scenario variables unresolved, using base prompt");
            }
            Err(_) => {}
        }
    }

    TurnPlan::Prompt {
        prompt: compose_system_prompt(context, provided),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_config::{
        ConversationConfiguration, CustomResponse, Scenario, VariableDefinition,
    };

    fn context() -> ConfigurationContext {
        let mut config = ConversationConfiguration::new("cfg-1");
        config.routing_settings.allow_human_escalation = true;
        config.routing_settings.escalation_triggers = vec!["manager".to_string()];
        config.routing_settings.escalation_department = "front office".to_string();
        config.variables = vec![VariableDefinition::new("orderId")];
        config.scenarios = vec![Scenario::new("refund_request", "Refund {{orderId}}.")
            .with_triggers(["refund"])
            .with_required_variables(["orderId"])];

        let mut ctx = ConfigurationContext::new("acme", "Acme", config);
        ctx.custom_responses = vec![CustomResponse {
            keyword: "opening hours".to_string(),
            response: "We are open 9 to 5.".to_string(),
        }];
        ctx
    }

    #[test]
    fn test_escalation_wins_over_scenario() {
        // Matches both the refund scenario trigger and the escalation trigger.
        let plan = plan_turn(
            &context(),
            "refund this or I talk to your manager",
            None,
            &HashMap::new(),
            Utc::now(),
        );
        match plan {
            TurnPlan::Escalate { decision, announcement } => {
                assert_eq!(decision.department, "front office");
                assert!(announcement.contains("front office"));
            }
            other => panic!("expected escalation, got {:?}", other),
        }
    }

    #[test]
    fn test_canned_response_before_composition() {
        let plan = plan_turn(
            &context(),
            "what are your opening hours?",
            None,
            &HashMap::new(),
            Utc::now(),
        );
        assert_eq!(
            plan,
            TurnPlan::CannedResponse {
                response: "We are open 9 to 5.".to_string()
            }
        );
    }

    #[test]
    fn test_scenario_prompt_with_variables() {
        let provided: HashMap<String, String> =
            [("orderId".to_string(), "A-7".to_string())].into();
        let plan = plan_turn(&context(), "I need a refund", None, &provided, Utc::now());
        assert_eq!(
            plan,
            TurnPlan::ScenarioPrompt {
                scenario: "refund_request".to_string(),
                prompt: "Refund A-7.".to_string()
            }
        );
    }

    #[test]
    fn test_unresolved_scenario_falls_back_to_base() {
        let plan = plan_turn(&context(), "I need a refund", None, &HashMap::new(), Utc::now());
        assert!(matches!(plan, TurnPlan::Prompt { .. }));
    }

    #[test]
    fn test_unknown_explicit_scenario_falls_back() {
        let plan = plan_turn(
            &context(),
            "hello there",
            Some("does_not_exist"),
            &HashMap::new(),
            Utc::now(),
        );
        assert!(matches!(plan, TurnPlan::Prompt { .. }));
    }

    #[test]
    fn test_closed_gate_short_circuits() {
        let mut ctx = context();
        ctx.business_hours.enabled = true; // no hours configured: always closed
        let plan = plan_turn(&ctx, "I demand a manager", None, &HashMap::new(), Utc::now());
        assert!(matches!(plan, TurnPlan::Closed { .. }));
    }
}
