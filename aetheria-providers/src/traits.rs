//! Common traits for provider implementations

use aetheria_core::{Error, Request, Response};
use async_trait::async_trait;
use serde_json::Value;

/// Convert requests to provider-specific format
#[async_trait]
pub trait RequestConverter: Send + Sync {
    /// Convert a generic request to provider-specific JSON
    async fn convert_request(&self, request: Request) -> Result<Value, Error>;
}

/// Parse responses from provider-specific format
#[async_trait]
pub trait ResponseParser: Send + Sync {
    /// Parse provider-specific JSON into a generic response
    async fn parse_response(&self, value: Value) -> Result<Response, Error>;
}
