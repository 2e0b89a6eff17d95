//! Composition-axis enums
//!
//! Five independent dimensions combine to build the base system prompt:
//! conversation type, industry, personality, communication style, formality.
//! The snake_case spellings are part of the persisted contract; existing
//! configurations are already authored with them.
//!
//! The enum sets are intentionally larger than the composer's clause tables.
//! An axis value without a clause contributes no text, which is a normal,
//! testable state rather than an error.

use serde::{Deserialize, Serialize};

/// Purpose of the conversation the assistant is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    Sales,
    Support,
    TechnicalSupport,
    CustomerService,
    Recruitment,
    Training,
    FinancialAdvice,
    MedicalAssistance,
    LegalAssistance,
    Education,
    Booking,
    Reservation,
    OrderManagement,
    Billing,
    Collections,
    Survey,
    LeadQualification,
    AppointmentScheduling,
    Onboarding,
    Retention,
    Complaints,
    ProductInquiry,
    Logistics,
    Delivery,
    Insurance,
    RealEstate,
    Travel,
    Hospitality,
    Banking,
    Investment,
    TaxAdvice,
    ItHelpdesk,
    Emergency,
    Reception,
    Concierge,
    Marketing,
    Feedback,
    Renewal,
    Upsell,
    Verification,
    FraudAlert,
    AccountManagement,
    Subscription,
    Donations,
    #[default]
    Custom,
}

impl ConversationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationType::Sales => "sales",
            ConversationType::Support => "support",
            ConversationType::TechnicalSupport => "technical_support",
            ConversationType::CustomerService => "customer_service",
            ConversationType::Recruitment => "recruitment",
            ConversationType::Training => "training",
            ConversationType::FinancialAdvice => "financial_advice",
            ConversationType::MedicalAssistance => "medical_assistance",
            ConversationType::LegalAssistance => "legal_assistance",
            ConversationType::Education => "education",
            ConversationType::Booking => "booking",
            ConversationType::Reservation => "reservation",
            ConversationType::OrderManagement => "order_management",
            ConversationType::Billing => "billing",
            ConversationType::Collections => "collections",
            ConversationType::Survey => "survey",
            ConversationType::LeadQualification => "lead_qualification",
            ConversationType::AppointmentScheduling => "appointment_scheduling",
            ConversationType::Onboarding => "onboarding",
            ConversationType::Retention => "retention",
            ConversationType::Complaints => "complaints",
            ConversationType::ProductInquiry => "product_inquiry",
            ConversationType::Logistics => "logistics",
            ConversationType::Delivery => "delivery",
            ConversationType::Insurance => "insurance",
            ConversationType::RealEstate => "real_estate",
            ConversationType::Travel => "travel",
            ConversationType::Hospitality => "hospitality",
            ConversationType::Banking => "banking",
            ConversationType::Investment => "investment",
            ConversationType::TaxAdvice => "tax_advice",
            ConversationType::ItHelpdesk => "it_helpdesk",
            ConversationType::Emergency => "emergency",
            ConversationType::Reception => "reception",
            ConversationType::Concierge => "concierge",
            ConversationType::Marketing => "marketing",
            ConversationType::Feedback => "feedback",
            ConversationType::Renewal => "renewal",
            ConversationType::Upsell => "upsell",
            ConversationType::Verification => "verification",
            ConversationType::FraudAlert => "fraud_alert",
            ConversationType::AccountManagement => "account_management",
            ConversationType::Subscription => "subscription",
            ConversationType::Donations => "donations",
            ConversationType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ConversationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Industry the company operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndustryType {
    #[default]
    General,
    Retail,
    Ecommerce,
    Healthcare,
    Finance,
    Banking,
    Insurance,
    RealEstate,
    Technology,
    Telecommunications,
    Education,
    Hospitality,
    Travel,
    Automotive,
    Manufacturing,
    Logistics,
    Legal,
    Energy,
    Construction,
    Agriculture,
    Entertainment,
}

impl IndustryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryType::General => "general",
            IndustryType::Retail => "retail",
            IndustryType::Ecommerce => "ecommerce",
            IndustryType::Healthcare => "healthcare",
            IndustryType::Finance => "finance",
            IndustryType::Banking => "banking",
            IndustryType::Insurance => "insurance",
            IndustryType::RealEstate => "real_estate",
            IndustryType::Technology => "technology",
            IndustryType::Telecommunications => "telecommunications",
            IndustryType::Education => "education",
            IndustryType::Hospitality => "hospitality",
            IndustryType::Travel => "travel",
            IndustryType::Automotive => "automotive",
            IndustryType::Manufacturing => "manufacturing",
            IndustryType::Logistics => "logistics",
            IndustryType::Legal => "legal",
            IndustryType::Energy => "energy",
            IndustryType::Construction => "construction",
            IndustryType::Agriculture => "agriculture",
            IndustryType::Entertainment => "entertainment",
        }
    }

    /// Human-readable name used in composed prompts, underscores as spaces
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::fmt::Display for IndustryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formality register of the assistant's speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormalityLevel {
    Casual,
    #[default]
    Professional,
    Formal,
    Technical,
    Educational,
    Friendly,
}

impl FormalityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormalityLevel::Casual => "casual",
            FormalityLevel::Professional => "professional",
            FormalityLevel::Formal => "formal",
            FormalityLevel::Technical => "technical",
            FormalityLevel::Educational => "educational",
            FormalityLevel::Friendly => "friendly",
        }
    }
}

impl std::fmt::Display for FormalityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Personality trait of the assistant persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Friendly,
    Empathetic,
    Technical,
    Humorous,
    #[default]
    Professional,
    Direct,
    Calm,
    Enthusiastic,
}

impl PersonalityTrait {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityTrait::Friendly => "friendly",
            PersonalityTrait::Empathetic => "empathetic",
            PersonalityTrait::Technical => "technical",
            PersonalityTrait::Humorous => "humorous",
            PersonalityTrait::Professional => "professional",
            PersonalityTrait::Direct => "direct",
            PersonalityTrait::Calm => "calm",
            PersonalityTrait::Enthusiastic => "enthusiastic",
        }
    }
}

impl std::fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the assistant shapes its answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Concise,
    Detailed,
    Simplified,
    Educational,
    #[default]
    Conversational,
    Narrative,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Concise => "concise",
            CommunicationStyle::Detailed => "detailed",
            CommunicationStyle::Simplified => "simplified",
            CommunicationStyle::Educational => "educational",
            CommunicationStyle::Conversational => "conversational",
            CommunicationStyle::Narrative => "narrative",
        }
    }
}

impl std::fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_spellings() {
        assert_eq!(
            serde_json::to_string(&ConversationType::TechnicalSupport).unwrap(),
            "\"technical_support\""
        );
        let parsed: ConversationType = serde_json::from_str("\"financial_advice\"").unwrap();
        assert_eq!(parsed, ConversationType::FinancialAdvice);

        assert_eq!(
            serde_json::to_string(&IndustryType::RealEstate).unwrap(),
            "\"real_estate\""
        );
    }

    #[test]
    fn test_axis_defaults() {
        assert_eq!(ConversationType::default(), ConversationType::Custom);
        assert_eq!(IndustryType::default(), IndustryType::General);
        assert_eq!(FormalityLevel::default(), FormalityLevel::Professional);
    }

    #[test]
    fn test_industry_display_name() {
        assert_eq!(IndustryType::RealEstate.display_name(), "real estate");
        assert_eq!(IndustryType::Retail.display_name(), "retail");
    }
}
