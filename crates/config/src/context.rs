//! Configuration context and store
//!
//! The context aggregates everything the composer and the escalation
//! detector read for one company: the active configuration, custom keyword
//! responses, prompt overrides, company facts, and the business-hours gate.
//! It is loaded once per turn and read-only from there on.
//!
//! The `ConfigurationStore` trait replaces lazy cross-reference population:
//! the engine is handed already-resolved data and never reaches into a
//! persistence layer itself.

use serde::{Deserialize, Serialize};

use frontdesk_core::{Error, Result};

use crate::company::{BusinessHours, CompanyInfo, CustomResponse, PromptOverrides};
use crate::configuration::ConversationConfiguration;

/// Everything the engine reads for one company
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationContext {
    pub company_id: String,
    /// Injected into every composition as the `companyName` variable
    pub company_name: String,
    /// The single active configuration for this company
    pub configuration: ConversationConfiguration,
    #[serde(default)]
    pub company_info: CompanyInfo,
    /// Ordered; first case-insensitive substring match wins
    #[serde(default)]
    pub custom_responses: Vec<CustomResponse>,
    #[serde(default)]
    pub prompts: PromptOverrides,
    #[serde(default)]
    pub business_hours: BusinessHours,
}

impl ConfigurationContext {
    pub fn new(
        company_id: impl Into<String>,
        company_name: impl Into<String>,
        configuration: ConversationConfiguration,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            company_name: company_name.into(),
            configuration,
            company_info: CompanyInfo::default(),
            custom_responses: Vec::new(),
            prompts: PromptOverrides::default(),
            business_hours: BusinessHours::default(),
        }
    }
}

/// Repository interface handing the engine already-resolved contexts.
///
/// Synchronous by design: implementations resolve the data before the
/// composition turn starts. How records are stored and queried is entirely
/// the implementer's concern.
pub trait ConfigurationStore: Send + Sync {
    /// The context for a company's active configuration, or
    /// `ConfigurationNotFound` when none is active.
    fn active_context(&self, company_id: &str) -> Result<ConfigurationContext>;

    /// A configuration by id, used to follow `linked_config_id` sub-flows.
    fn configuration(&self, config_id: &str) -> Result<ConversationConfiguration>;
}

/// Store over a fixed set of contexts, used in tests and single-tenant
/// deployments.
#[derive(Default)]
pub struct InMemoryConfigurationStore {
    contexts: Vec<ConfigurationContext>,
}

impl InMemoryConfigurationStore {
    pub fn new(contexts: Vec<ConfigurationContext>) -> Self {
        Self { contexts }
    }
}

impl ConfigurationStore for InMemoryConfigurationStore {
    fn active_context(&self, company_id: &str) -> Result<ConfigurationContext> {
        self.contexts
            .iter()
            .find(|c| c.company_id == company_id && c.configuration.active)
            .cloned()
            .ok_or_else(|| Error::ConfigurationNotFound(company_id.to_string()))
    }

    fn configuration(&self, config_id: &str) -> Result<ConversationConfiguration> {
        self.contexts
            .iter()
            .map(|c| &c.configuration)
            .find(|cfg| cfg.id == config_id)
            .cloned()
            .ok_or_else(|| Error::ConfigurationNotFound(config_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(company: &str, active: bool) -> ConfigurationContext {
        let mut config = ConversationConfiguration::new(format!("cfg-{}", company));
        config.active = active;
        ConfigurationContext::new(company, company.to_uppercase(), config)
    }

    #[test]
    fn test_active_context_lookup() {
        let store =
            InMemoryConfigurationStore::new(vec![context("acme", true), context("globex", false)]);
        assert!(store.active_context("acme").is_ok());

        let err = store.active_context("globex").unwrap_err();
        assert!(matches!(err, Error::ConfigurationNotFound(_)));

        let err = store.active_context("initech").unwrap_err();
        assert!(matches!(err, Error::ConfigurationNotFound(_)));
    }

    #[test]
    fn test_configuration_by_id() {
        let store = InMemoryConfigurationStore::new(vec![context("acme", true)]);
        assert_eq!(store.configuration("cfg-acme").unwrap().id, "cfg-acme");
        assert!(store.configuration("cfg-missing").is_err());
    }
}
