//! Core types for the frontdesk voice assistant
//!
//! This crate provides the call-session model shared by the composition
//! engine and the surrounding system:
//! - Call session record with status state machine and append-only transcript
//! - Transfer annotation and externally attached sentiment
//! - Error taxonomy for the engine crates
//! - In-memory session registry with per-session write serialization

pub mod error;
pub mod registry;
pub mod session;

pub use error::{Error, Result, StateOperation};
pub use registry::SessionRegistry;
pub use session::{
    CallSession, CallStatus, Sentiment, SentimentLabel, Speaker, TranscriptEntry,
};
