//! AI model settings for a configuration

use serde::{Deserialize, Serialize};

use crate::conversation::{CommunicationStyle, PersonalityTrait};

/// Library default for the system prompt template. A configuration whose
/// template equals this sentinel uses rule-based composition; anything else
/// is treated as a custom override template.
pub const DEFAULT_SYSTEM_PROMPT_TEMPLATE: &str =
    "You are a helpful assistant for {{companyName}}.";

/// Model and persona settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    /// Identifier of the language model to call
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Custom system prompt template; the library default sentinel means
    /// "compose from the axis rules instead"
    #[serde(default = "default_system_prompt_template")]
    pub system_prompt_template: String,
    #[serde(default)]
    pub personality_trait: PersonalityTrait,
    #[serde(default)]
    pub communication_style: CommunicationStyle,
    /// Sampling temperature in [0, 1]
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Extra instructions extracted from uploaded documents, appended to the
    /// composed prompt when present
    #[serde(default)]
    pub pdf_instructions: String,
}

fn default_model_id() -> String {
    "gpt-4o-mini".to_string()
}

fn default_system_prompt_template() -> String {
    DEFAULT_SYSTEM_PROMPT_TEMPLATE.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            system_prompt_template: default_system_prompt_template(),
            personality_trait: PersonalityTrait::default(),
            communication_style: CommunicationStyle::default(),
            temperature: default_temperature(),
            pdf_instructions: String::new(),
        }
    }
}

impl AiSettings {
    /// Whether a custom template overrides rule-based composition
    pub fn has_custom_template(&self) -> bool {
        !self.system_prompt_template.is_empty()
            && self.system_prompt_template != DEFAULT_SYSTEM_PROMPT_TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_settings_defaults() {
        let settings = AiSettings::default();
        assert!(!settings.has_custom_template());
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.personality_trait, PersonalityTrait::Professional);
    }

    #[test]
    fn test_custom_template_detection() {
        let yaml = r#"
modelId: gpt-4o
systemPromptTemplate: "You are the booking desk of {{companyName}}."
temperature: 0.3
"#;
        let settings: AiSettings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.has_custom_template());
        assert_eq!(settings.temperature, 0.3);
    }
}
