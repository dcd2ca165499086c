//! Core provider trait for remote text generation

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;
use async_trait::async_trait;

/// The fundamental trait for completion services
///
/// A provider receives the full conversation transcript together with the
/// sampling parameters and returns the text of a single completion, or fails.
/// Transport and authentication details are the implementation's concern.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a request and get a complete response
    async fn request(&self, request: Request) -> Result<Response>;
}
