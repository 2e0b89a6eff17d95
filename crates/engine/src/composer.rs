//! System prompt composition
//!
//! Two mutually exclusive paths: a custom override template, or a
//! deterministic sentence built from the composition axes in fixed order
//! (role, industry, personality, communication style, formality). The
//! clause tables deliberately cover only part of each enum; an unmapped
//! value contributes no text and is never an error.
//!
//! Either path ends with variable substitution over the configuration's
//! declared variables, the company-info supplements, and an always-injected
//! `companyName`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use frontdesk_config::{
    CommunicationStyle, ConfigurationContext, ConversationType, FormalityLevel, IndustryType,
    PersonalityTrait,
};

use crate::template::render_template;
use crate::variables::{merge_variables, missing_required};

/// Role clause per conversation type. Types without an entry fall back to
/// the generic assistant role.
static ROLE_CLAUSES: Lazy<HashMap<ConversationType, &'static str>> = Lazy::new(|| {
    use ConversationType::*;
    let mut map = HashMap::new();
    map.insert(Sales, "an experienced sales agent");
    map.insert(Support, "a technical support agent");
    map.insert(TechnicalSupport, "a technical support agent");
    map.insert(CustomerService, "a customer service representative");
    map.insert(Recruitment, "a recruitment specialist");
    map.insert(Training, "a corporate trainer");
    map.insert(FinancialAdvice, "a financial advisor");
    map.insert(MedicalAssistance, "a medical assistance coordinator");
    map.insert(LegalAssistance, "a legal intake assistant");
    map.insert(Booking, "a booking assistant");
    map.insert(Reservation, "a booking assistant");
    map.insert(AppointmentScheduling, "a scheduling assistant");
    map.insert(Billing, "a billing specialist");
    map.insert(Collections, "a payment reminder agent");
    map.insert(Survey, "a survey interviewer");
    map.insert(Reception, "a virtual receptionist");
    map.insert(ItHelpdesk, "an IT helpdesk agent");
    map
});

const FALLBACK_ROLE: &str = "a professional AI assistant";

static PERSONALITY_CLAUSES: Lazy<HashMap<PersonalityTrait, &'static str>> = Lazy::new(|| {
    use PersonalityTrait::*;
    let mut map = HashMap::new();
    map.insert(Friendly, "You are warm, approachable and friendly.");
    map.insert(Empathetic, "You listen carefully and respond with empathy.");
    map.insert(Technical, "You are precise and comfortable with technical detail.");
    map.insert(Humorous, "You keep the conversation light with a touch of humor.");
    map
});

static STYLE_CLAUSES: Lazy<HashMap<CommunicationStyle, &'static str>> = Lazy::new(|| {
    use CommunicationStyle::*;
    let mut map = HashMap::new();
    map.insert(Concise, "Keep your answers short and to the point.");
    map.insert(Detailed, "Give thorough, complete answers.");
    map.insert(Simplified, "Explain things in plain language, avoiding jargon.");
    map.insert(Educational, "Walk the caller through the reasoning step by step.");
    map
});

static FORMALITY_CLAUSES: Lazy<HashMap<FormalityLevel, &'static str>> = Lazy::new(|| {
    use FormalityLevel::*;
    let mut map = HashMap::new();
    map.insert(Casual, "Speak in a relaxed, casual register.");
    map.insert(Professional, "Maintain a professional tone at all times.");
    map.insert(Formal, "Use a formal, courteous register.");
    map.insert(Technical, "Use accurate technical terminology.");
    map
});

/// Build the rule-composed base template, before substitution
fn compose_rule_template(context: &ConfigurationContext) -> String {
    let config = &context.configuration;
    let role = ROLE_CLAUSES
        .get(&config.conversation_type)
        .copied()
        .unwrap_or(FALLBACK_ROLE);

    let mut parts = vec![format!("You are {} for {{{{companyName}}}}.", role)];

    if config.industry_type != IndustryType::General {
        parts.push(format!(
            "You are specialized in the {} sector.",
            config.industry_type.display_name()
        ));
    }
    if let Some(clause) = PERSONALITY_CLAUSES.get(&config.ai_settings.personality_trait) {
        parts.push((*clause).to_string());
    }
    if let Some(clause) = STYLE_CLAUSES.get(&config.ai_settings.communication_style) {
        parts.push((*clause).to_string());
    }
    if let Some(clause) = FORMALITY_CLAUSES.get(&config.formality_level) {
        parts.push((*clause).to_string());
    }

    parts.join(" ")
}

/// The variable map composition runs with: declared variables merged with
/// provided values, company-info supplements where not already set, and the
/// authoritative `companyName`.
fn composition_variables(
    context: &ConfigurationContext,
    provided: &HashMap<String, String>,
) -> HashMap<String, String> {
    let config = &context.configuration;
    let mut vars = merge_variables(&config.variables, provided);

    let missing = missing_required(&config.variables, &vars);
    if !missing.is_empty() {
        // Missing required variables degrade to the base prompt with
        // pass-through placeholders instead of aborting the conversation.
        tracing::warn!(config = %config.id, ?missing, "composing with missing required variables");
    }

    for (key, value) in context.company_info.as_variables() {
        vars.entry(key).or_insert(value);
    }
    vars.insert("companyName".to_string(), context.company_name.clone());
    vars
}

/// Compose the system prompt for one turn. Total: never fails, for any
/// configuration.
pub fn compose_system_prompt(
    context: &ConfigurationContext,
    provided: &HashMap<String, String>,
) -> String {
    let config = &context.configuration;

    let template = if config.ai_settings.has_custom_template() {
        config.ai_settings.system_prompt_template.clone()
    } else if !context.prompts.base_system_prompt.is_empty() {
        context.prompts.base_system_prompt.clone()
    } else {
        compose_rule_template(context)
    };

    let vars = composition_variables(context, provided);
    let mut prompt = render_template(&template, &vars);

    let pdf_instructions = config.ai_settings.pdf_instructions.trim();
    if !pdf_instructions.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(pdf_instructions);
    }
    prompt
}

/// Welcome line for call start, from the override template or its default
pub fn welcome_message(context: &ConfigurationContext) -> String {
    let vars = composition_variables(context, &HashMap::new());
    render_template(&context.prompts.welcome_prompt, &vars)
}

/// Announcement spoken before handing the call to a department
pub fn transfer_message(context: &ConfigurationContext, department: &str) -> String {
    let mut vars = composition_variables(context, &HashMap::new());
    vars.insert("department".to_string(), department.to_string());
    render_template(&context.prompts.transfer_prompt, &vars)
}
