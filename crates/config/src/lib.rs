//! Conversation configuration model for the frontdesk voice assistant
//!
//! A business configures its assistant along independent axes (conversation
//! purpose, industry, formality, personality, communication style), declares
//! template variables and scenarios, and sets escalation routing. This crate
//! holds those persisted shapes, the per-company `ConfigurationContext` read
//! model, YAML loading, and startup validation.
//!
//! Field spellings (camelCase), axis enum spellings (snake_case) and the
//! `{{name}}` placeholder syntax are part of the external contract: existing
//! configurations and templates are already authored with them.

pub mod ai;
pub mod company;
pub mod configuration;
pub mod context;
pub mod conversation;
pub mod routing;
pub mod scenario;
pub mod validator;
pub mod variables;

pub use ai::{AiSettings, DEFAULT_SYSTEM_PROMPT_TEMPLATE};
pub use company::{
    BusinessHours, CompanyInfo, CustomResponse, DayHours, FaqEntry, PromptOverrides,
    DEFAULT_TRANSFER_PROMPT, DEFAULT_WELCOME_PROMPT,
};
pub use configuration::ConversationConfiguration;
pub use context::{ConfigurationContext, ConfigurationStore, InMemoryConfigurationStore};
pub use conversation::{
    CommunicationStyle, ConversationType, FormalityLevel, IndustryType, PersonalityTrait,
};
pub use routing::RoutingSettings;
pub use scenario::Scenario;
pub use validator::{
    ConfigValidator, ValidationCategory, ValidationError, ValidationResult, ValidationSeverity,
};
pub use variables::VariableDefinition;

use thiserror::Error;

/// Errors when loading configuration documents
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
