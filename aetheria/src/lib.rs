//! Aetheria - a career-guidance chat assistant
//!
//! This crate bundles the pieces of a guidance session: an OpenAI-compatible
//! completion provider, an in-memory transcript, a token budget that evicts
//! the oldest turns, and a keyword gate that keeps the conversation on
//! career topics.
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn run() -> Result<(), aetheria::Error> {
//! use aetheria::client::{Config, ConversationManager};
//! use aetheria::providers::OpenAI;
//!
//! let config = Config::from_env()?;
//! let provider = OpenAI::from_config(config.provider_config())?;
//! let mut session = ConversationManager::from_config(provider, &config)?;
//!
//! let outcome = session.submit("How should I answer salary questions?").await;
//! println!("{}", outcome.text().unwrap_or("No response"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use aetheria_core::*;

#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Completion service providers
    pub use aetheria_providers::*;
}

#[cfg(feature = "state")]
#[cfg_attr(docsrs, doc(cfg(feature = "state")))]
pub mod state {
    //! Conversation transcript
    pub use aetheria_state::*;
}

#[cfg(feature = "context")]
#[cfg_attr(docsrs, doc(cfg(feature = "context")))]
pub mod context {
    //! Token counting and budget enforcement
    pub use aetheria_context::*;
}

#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client {
    //! Conversation manager and its configuration
    pub use aetheria_client::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use aetheria_core::{Error, Message, Model, Parameters, Provider, Request, Response, Role};

    #[cfg(feature = "providers")]
    pub use aetheria_providers::{OpenAI, OpenAIConfig};

    #[cfg(feature = "client")]
    pub use aetheria_client::{Config, ConversationManager, Settings, TurnOutcome};
}
