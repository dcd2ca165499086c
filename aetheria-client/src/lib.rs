//! Career-guidance conversation manager
//!
//! This crate wires the completion provider, transcript, token budget and
//! domain classifier into a single [`ConversationManager`] session, together
//! with the configuration and settings surfaces that drive it.

mod config;
mod document;
mod domain;
mod manager;
mod settings;

pub use config::{
    Config, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOKEN_BUDGET, DEFAULT_TOP_P,
};
pub use document::{DocumentExtractor, PdfExtractor};
pub use domain::{DomainClassifier, ENGLISH_CAREER_KEYWORDS, INDONESIAN_CAREER_KEYWORDS};
pub use manager::{
    ConversationManager, TurnOutcome, TurnState, CAREER_REFUSAL, DEFAULT_SYSTEM_INSTRUCTION,
};
pub use settings::{Settings, MODEL_OPTIONS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Config, ConversationManager, Settings, TurnOutcome};
    pub use aetheria_core::{Message, Role};
}
