//! Prompt composition and escalation engine
//!
//! Composes the system prompt sent to the external language model from a
//! company's conversation configuration, selects scenarios, detects
//! keyword-driven escalation, and plans one conversation turn. Everything
//! here is pure and synchronous with respect to its inputs: no I/O, no
//! shared mutable state, safe to call from any number of concurrent request
//! handlers.
//!
//! The engine only produces and consumes text. Telephony, speech
//! conversion, persistence and the model call itself are external
//! collaborators.

pub mod composer;
pub mod escalation;
pub mod scenario;
pub mod template;
pub mod turn;
pub mod variables;

pub use composer::{compose_system_prompt, transfer_message, welcome_message};
pub use escalation::{detect_escalation, EscalationDecision};
pub use scenario::{match_scenario, scenario_prompt, ScenarioCatalog};
pub use template::render_template;
pub use turn::{plan_turn, TurnPlan};
pub use variables::resolve_variables;

// Shared error taxonomy lives in frontdesk-core.
pub use frontdesk_core::{Error, Result};
