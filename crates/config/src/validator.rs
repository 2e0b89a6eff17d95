//! Startup validation for conversation configurations
//!
//! Malformed persisted configuration (duplicate variable names, duplicate
//! scenario names) is a hard startup-time failure; softer problems surface
//! as errors or warnings so operators can fix them without an outage.

use chrono::NaiveTime;
use std::collections::{HashMap, HashSet};

use crate::configuration::ConversationConfiguration;
use crate::context::ConfigurationContext;

/// Validation finding with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: ValidationCategory,
    /// Config section the finding belongs to
    pub source: String,
    /// Specific field or name, when applicable
    pub field: Option<String>,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field_str = self.field.as_deref().unwrap_or("(root)");
        write!(
            f,
            "[{:?}] {}/{}: {}",
            self.severity, self.source, field_str, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Category of validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    /// Missing required configuration
    MissingRequired,
    /// Invalid cross-reference
    InvalidReference,
    /// Value out of expected range
    ValueOutOfRange,
    /// Duplicate definition
    Duplicate,
    /// Unused definition (warning)
    Unused,
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational warning
    Warning,
    /// Potential issue
    Error,
    /// Critical - will prevent startup
    Critical,
}

/// Accumulated validation findings for one configuration or set
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    /// Configuration id (or set label) being validated
    pub subject: String,
}

impl ValidationResult {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            subject: subject.into(),
        }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_critical(&mut self, category: ValidationCategory, source: &str, field: &str, message: &str) {
        self.errors.push(ValidationError {
            category,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Critical,
        });
    }

    pub fn add_error(&mut self, category: ValidationCategory, source: &str, field: &str, message: &str) {
        self.errors.push(ValidationError {
            category,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    pub fn add_warning(&mut self, source: &str, field: &str, message: &str) {
        self.errors.push(ValidationError {
            category: ValidationCategory::Unused,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    /// Whether startup may proceed (no critical findings)
    pub fn is_ok(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Critical)
    }

    pub fn critical_errors(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Critical)
            .collect()
    }

    pub fn summary(&self) -> String {
        let critical = self
            .errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Critical)
            .count();
        let errors = self
            .errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Error)
            .count();
        let warnings = self
            .errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Warning)
            .count();

        if self.errors.is_empty() {
            format!("'{}': all validations passed", self.subject)
        } else {
            format!(
                "'{}': {} critical, {} errors, {} warnings",
                self.subject, critical, errors, warnings
            )
        }
    }
}

/// Configuration validator
pub struct ConfigValidator {
    include_warnings: bool,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self {
            include_warnings: true,
        }
    }

    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }

    /// Validate a single configuration
    pub fn validate(&self, config: &ConversationConfiguration) -> ValidationResult {
        let mut result = ValidationResult::new(config.id.clone());
        self.validate_variables(config, &mut result);
        self.validate_scenarios(config, &mut result);
        self.validate_ai_settings(config, &mut result);
        self.validate_routing(config, &mut result);
        result
    }

    /// Validate a full context, including the company block
    pub fn validate_context(&self, context: &ConfigurationContext) -> ValidationResult {
        let mut result = self.validate(&context.configuration);
        result.subject = context.company_id.clone();
        self.validate_business_hours(context, &mut result);
        if self.include_warnings {
            for (idx, response) in context.custom_responses.iter().enumerate() {
                if response.keyword.is_empty() {
                    result.add_warning(
                        "customResponses",
                        &idx.to_string(),
                        "Empty keyword never matches",
                    );
                }
            }
        }
        result
    }

    /// Validate references across a set of configurations: every
    /// `linked_config_id` must exist and the reference graph must be acyclic.
    pub fn validate_set(&self, configs: &[ConversationConfiguration]) -> ValidationResult {
        let mut result = ValidationResult::new("configuration set");
        let by_id: HashMap<&str, &ConversationConfiguration> =
            configs.iter().map(|c| (c.id.as_str(), c)).collect();

        for config in configs {
            for scenario in &config.scenarios {
                if let Some(linked) = &scenario.linked_config_id {
                    if !by_id.contains_key(linked.as_str()) {
                        result.add_error(
                            ValidationCategory::InvalidReference,
                            "scenarios",
                            &scenario.name,
                            &format!("Linked configuration does not exist: {}", linked),
                        );
                    }
                }
            }
        }

        // Cycle check over the configuration reference graph.
        for config in configs {
            let mut visited = HashSet::new();
            if self.has_cycle(config, &by_id, &mut visited) {
                result.add_error(
                    ValidationCategory::InvalidReference,
                    "scenarios",
                    &config.id,
                    "Linked configurations form a cycle",
                );
            }
        }

        result
    }

    fn has_cycle<'a>(
        &self,
        config: &'a ConversationConfiguration,
        by_id: &HashMap<&'a str, &'a ConversationConfiguration>,
        visited: &mut HashSet<&'a str>,
    ) -> bool {
        if !visited.insert(config.id.as_str()) {
            return true;
        }
        for scenario in &config.scenarios {
            if let Some(linked) = &scenario.linked_config_id {
                if let Some(next) = by_id.get(linked.as_str()) {
                    if self.has_cycle(next, by_id, visited) {
                        return true;
                    }
                }
            }
        }
        visited.remove(config.id.as_str());
        false
    }

    fn validate_variables(&self, config: &ConversationConfiguration, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for variable in &config.variables {
            if variable.name.is_empty() {
                result.add_error(
                    ValidationCategory::MissingRequired,
                    "variables",
                    "(unnamed)",
                    "Variable has no name",
                );
                continue;
            }
            if !seen.insert(variable.name.as_str()) {
                result.add_critical(
                    ValidationCategory::Duplicate,
                    "variables",
                    &variable.name,
                    "Duplicate variable name",
                );
            }
        }
    }

    fn validate_scenarios(&self, config: &ConversationConfiguration, result: &mut ValidationResult) {
        let declared: HashSet<&str> = config.variables.iter().map(|v| v.name.as_str()).collect();

        let mut seen = HashSet::new();
        for scenario in &config.scenarios {
            if !seen.insert(scenario.name.as_str()) {
                result.add_critical(
                    ValidationCategory::Duplicate,
                    "scenarios",
                    &scenario.name,
                    "Duplicate scenario name",
                );
            }

            for required in &scenario.required_variables {
                if !declared.contains(required.as_str()) {
                    result.add_error(
                        ValidationCategory::InvalidReference,
                        "scenarios",
                        &scenario.name,
                        &format!("Required variable is not declared: {}", required),
                    );
                }
            }

            if self.include_warnings {
                if scenario.triggers.iter().any(|t| t.is_empty()) {
                    result.add_warning("scenarios", &scenario.name, "Empty trigger never matches");
                }
                if scenario.prompt.is_empty() {
                    result.add_warning("scenarios", &scenario.name, "Scenario has no prompt");
                }
            }
        }
    }

    fn validate_ai_settings(&self, config: &ConversationConfiguration, result: &mut ValidationResult) {
        let temperature = config.ai_settings.temperature;
        if !(0.0..=1.0).contains(&temperature) {
            result.add_error(
                ValidationCategory::ValueOutOfRange,
                "aiSettings",
                "temperature",
                &format!("Temperature {} outside [0, 1]", temperature),
            );
        }
    }

    fn validate_routing(&self, config: &ConversationConfiguration, result: &mut ValidationResult) {
        let routing = &config.routing_settings;
        if routing.allow_human_escalation {
            if routing.escalation_department.is_empty() {
                result.add_error(
                    ValidationCategory::MissingRequired,
                    "routingSettings",
                    "escalationDepartment",
                    "Escalation is enabled but no department is configured",
                );
            }
            if self.include_warnings && routing.escalation_triggers.is_empty() {
                result.add_warning(
                    "routingSettings",
                    "escalationTriggers",
                    "Escalation is enabled but no triggers are configured",
                );
            }
        }
    }

    fn validate_business_hours(&self, context: &ConfigurationContext, result: &mut ValidationResult) {
        let hours = &context.business_hours;
        if !hours.enabled {
            return;
        }
        for (day, window) in &hours.hours {
            for time in [&window.open, &window.close] {
                if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                    result.add_error(
                        ValidationCategory::ValueOutOfRange,
                        "businessHours",
                        day,
                        &format!("Unparseable time: {}", time),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::variables::VariableDefinition;

    fn base_config() -> ConversationConfiguration {
        ConversationConfiguration::new("cfg-1")
    }

    #[test]
    fn test_duplicate_variable_is_critical() {
        let mut config = base_config();
        config.variables.push(VariableDefinition::new("city"));
        config.variables.push(VariableDefinition::new("city"));

        let result = ConfigValidator::new().validate(&config);
        assert!(!result.is_ok());
        assert_eq!(result.critical_errors().len(), 1);
    }

    #[test]
    fn test_undeclared_scenario_variable_is_error() {
        let mut config = base_config();
        config.scenarios.push(
            Scenario::new("booking", "Book for {{date}}").with_required_variables(["date"]),
        );

        let result = ConfigValidator::new().validate(&config);
        assert!(result.is_ok()); // not critical
        assert!(result
            .errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Error
                && e.message.contains("date")));
    }

    #[test]
    fn test_escalation_without_department() {
        let mut config = base_config();
        config.routing_settings.allow_human_escalation = true;
        config.routing_settings.escalation_triggers = vec!["manager".to_string()];

        let result = ConfigValidator::new().validate(&config);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field.as_deref() == Some("escalationDepartment")));
    }

    #[test]
    fn test_temperature_range() {
        let mut config = base_config();
        config.ai_settings.temperature = 1.5;
        let result = ConfigValidator::new().validate(&config);
        assert!(result
            .errors
            .iter()
            .any(|e| e.category == ValidationCategory::ValueOutOfRange));
    }

    #[test]
    fn test_linked_configuration_cycle() {
        let mut a = ConversationConfiguration::new("cfg-a");
        let mut b = ConversationConfiguration::new("cfg-b");
        a.scenarios.push({
            let mut s = Scenario::new("to_b", "...");
            s.linked_config_id = Some("cfg-b".to_string());
            s
        });
        b.scenarios.push({
            let mut s = Scenario::new("to_a", "...");
            s.linked_config_id = Some("cfg-a".to_string());
            s
        });

        let result = ConfigValidator::new().validate_set(&[a, b]);
        assert!(result
            .errors
            .iter()
            .any(|e| e.message.contains("cycle")));
    }

    #[test]
    fn test_acyclic_links_pass() {
        let mut a = ConversationConfiguration::new("cfg-a");
        let b = ConversationConfiguration::new("cfg-b");
        a.scenarios.push({
            let mut s = Scenario::new("to_b", "...");
            s.linked_config_id = Some("cfg-b".to_string());
            s
        });

        let result = ConfigValidator::new().validate_set(&[a, b]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut result = ValidationResult::new("cfg-1");
        assert!(result.summary().contains("all validations passed"));
        result.add_warning("scenarios", "x", "warning");
        assert!(result.is_ok());
        result.add_critical(ValidationCategory::Duplicate, "variables", "city", "dup");
        assert!(!result.is_ok());
        assert!(result.summary().contains("1 critical"));
    }
}
