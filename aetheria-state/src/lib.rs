//! Conversation state for the Aetheria career assistant
//!
//! This crate provides the in-memory transcript a session keeps between
//! turns. The transcript lives for the lifetime of the process only.

pub mod transcript;

pub use transcript::Transcript;
