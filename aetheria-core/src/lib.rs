//! Core traits and types for the Aetheria career assistant
//!
//! This crate provides the foundational abstractions shared by every other
//! crate in the workspace: role-tagged messages, completion requests and
//! responses, the [`Provider`] trait for remote text generation, and the
//! workspace-wide [`Error`] type.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use provider::Provider;
pub use types::{
    message::{Message, Role},
    request::{Model, Parameters, ParametersBuilder, Request, RequestBuilder},
    response::{FinishReason, Response, ResponseMetadata, Usage},
};
