//! Company voice-assistant block
//!
//! The subset of a company record the engine reads: supplementary company
//! facts, custom keyword responses, prompt overrides, and the business-hours
//! gate.

use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default welcome prompt template
pub const DEFAULT_WELCOME_PROMPT: &str =
    "Hello, thank you for calling {{companyName}}. How can I help you today?";

/// Default transfer prompt template
pub const DEFAULT_TRANSFER_PROMPT: &str =
    "One moment please, I am transferring you to {{department}}.";

/// Company facts injected into composition as supplementary variables.
/// These are never required: a missing entry simply contributes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub team: Vec<String>,
}

/// One frequently asked question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl CompanyInfo {
    /// Flatten to `name -> value` pairs usable as template variables
    pub fn as_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        if !self.products.is_empty() {
            vars.push(("products".to_string(), self.products.join(", ")));
        }
        if !self.services.is_empty() {
            vars.push(("services".to_string(), self.services.join(", ")));
        }
        if !self.faq.is_empty() {
            let joined = self
                .faq
                .iter()
                .map(|f| format!("Q: {} A: {}", f.question, f.answer))
                .collect::<Vec<_>>()
                .join(" | ");
            vars.push(("faq".to_string(), joined));
        }
        if !self.team.is_empty() {
            vars.push(("team".to_string(), self.team.join(", ")));
        }
        vars
    }
}

/// One canned keyword response. Checked before generic composition; the
/// first case-insensitive substring match wins, not the most specific one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResponse {
    pub keyword: String,
    pub response: String,
}

impl CustomResponse {
    pub fn matches(&self, utterance: &str) -> bool {
        !self.keyword.is_empty()
            && utterance.to_lowercase().contains(&self.keyword.to_lowercase())
    }
}

/// Override templates. A non-default value suppresses the corresponding
/// rule-based composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOverrides {
    /// Overrides the composed base system prompt when non-empty
    #[serde(default)]
    pub base_system_prompt: String,
    #[serde(default = "default_welcome_prompt")]
    pub welcome_prompt: String,
    #[serde(default = "default_transfer_prompt")]
    pub transfer_prompt: String,
}

fn default_welcome_prompt() -> String {
    DEFAULT_WELCOME_PROMPT.to_string()
}

fn default_transfer_prompt() -> String {
    DEFAULT_TRANSFER_PROMPT.to_string()
}

impl Default for PromptOverrides {
    fn default() -> Self {
        Self {
            base_system_prompt: String::new(),
            welcome_prompt: default_welcome_prompt(),
            transfer_prompt: default_transfer_prompt(),
        }
    }
}

/// Opening hours for one day, 24h wall-clock times
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    /// "09:00"
    pub open: String,
    /// "17:30"
    pub close: String,
}

/// Weekly business-hours gate
///
/// Calls outside opening hours get the configured closed message instead of
/// the composed assistant. Disabled means always open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    #[serde(default)]
    pub enabled: bool,
    /// Offset from UTC in minutes for the company's local clock
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Hours keyed by lowercase weekday name ("monday".."sunday").
    /// A missing day means closed all day.
    #[serde(default)]
    pub hours: HashMap<String, DayHours>,
    /// Message played when the company is closed
    #[serde(default = "default_closed_message")]
    pub closed_message: String,
}

fn default_closed_message() -> String {
    "We are currently closed. Please call back during business hours.".to_string()
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            enabled: false,
            utc_offset_minutes: 0,
            hours: HashMap::new(),
            closed_message: default_closed_message(),
        }
    }
}

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl BusinessHours {
    /// Whether the company is open at the given instant.
    ///
    /// Unparseable configured times close that day rather than panicking;
    /// the validator flags them at startup.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return true;
        }
        let local = now + chrono::Duration::minutes(self.utc_offset_minutes as i64);
        let Some(day) = self.hours.get(weekday_key(local.weekday())) else {
            return false;
        };
        let (Ok(open), Ok(close)) = (
            NaiveTime::parse_from_str(&day.open, "%H:%M"),
            NaiveTime::parse_from_str(&day.close, "%H:%M"),
        ) else {
            return false;
        };
        let time = match NaiveTime::from_hms_opt(local.hour(), local.minute(), 0) {
            Some(t) => t,
            None => return false,
        };
        open <= time && time < close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_custom_response_first_substring_match() {
        let responses = vec![
            CustomResponse {
                keyword: "price".to_string(),
                response: "Our pricing starts at $10.".to_string(),
            },
            CustomResponse {
                keyword: "price match".to_string(),
                response: "We match any price.".to_string(),
            },
        ];
        // First match wins even though the second keyword is more specific.
        let hit = responses
            .iter()
            .find(|r| r.matches("do you do price match?"))
            .unwrap();
        assert_eq!(hit.response, "Our pricing starts at $10.");
    }

    #[test]
    fn test_company_info_variables() {
        let info = CompanyInfo {
            products: vec!["widgets".to_string(), "gadgets".to_string()],
            services: Vec::new(),
            faq: vec![FaqEntry {
                question: "Do you ship?".to_string(),
                answer: "Yes, worldwide.".to_string(),
            }],
            team: Vec::new(),
        };
        let vars = info.as_variables();
        assert!(vars.contains(&("products".to_string(), "widgets, gadgets".to_string())));
        assert!(vars.iter().any(|(k, v)| k == "faq" && v.contains("worldwide")));
        assert!(!vars.iter().any(|(k, _)| k == "services"));
    }

    #[test]
    fn test_business_hours_gate() {
        let yaml = r#"
enabled: true
utcOffsetMinutes: 0
hours:
  monday:
    open: "09:00"
    close: "17:00"
closedMessage: "Closed, sorry."
"#;
        let hours: BusinessHours = serde_yaml::from_str(yaml).unwrap();
        // Monday 2026-08-24 10:00 UTC
        let open = Utc.with_ymd_and_hms(2026, 8, 24, 10, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 8, 24, 18, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        assert!(hours.is_open_at(open));
        assert!(!hours.is_open_at(late));
        assert!(!hours.is_open_at(sunday));
    }

    #[test]
    fn test_disabled_gate_always_open() {
        let hours = BusinessHours::default();
        let any = Utc.with_ymd_and_hms(2026, 1, 1, 3, 0, 0).unwrap();
        assert!(hours.is_open_at(any));
    }
}
