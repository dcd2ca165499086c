//! Token counting and budget enforcement
//!
//! The [`TokenCounter`] measures text in model tokens and the
//! [`BudgetEnforcer`] uses it to keep a [`Transcript`](aetheria_state::Transcript)
//! under a configured ceiling by evicting its oldest non-system messages.

pub mod budget;
pub mod counter;
pub mod error;

pub use budget::{BudgetEnforcer, Enforcement};
pub use counter::{count_tokens, TiktokenCounter, TiktokenTokenizer, TokenCounter, Tokenizer};
pub use error::ContextError;
