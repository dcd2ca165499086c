//! OpenAI provider implementation
//!
//! This module talks to any service exposing the OpenAI chat completions
//! API. It implements the core `Provider` trait and uses the standardized
//! request/response conversion pipeline.

use crate::http::{create_headers, HttpClient, ReqwestClient};
use crate::openai::{config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser};
use crate::traits::{RequestConverter, ResponseParser};
use aetheria_core::{Error, Provider, Request, Response};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Provider for OpenAI-compatible chat completions
///
/// # Example
///
/// ```no_run
/// use aetheria_providers::{OpenAI, OpenAIConfig};
///
/// # fn example() -> Result<(), aetheria_core::Error> {
/// let config = OpenAIConfig::new("your-api-key")
///     .with_base_url("https://api.together.xyz/v1");
/// let provider = OpenAI::from_config(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a new provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser,
        }
    }

    /// Create a new provider backed by the default reqwest client
    pub fn from_config(config: OpenAIConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(config, client))
    }

    /// The configuration this provider was built with
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn request(&self, request: Request) -> Result<Response, Error> {
        let model = request.model.clone();
        let message_count = request.messages.len();
        let body = self.converter.convert_request(request).await?;
        trace!(body = %body, "chat completion request body");

        let headers = create_headers(&self.config.api_key)?;
        let url = self.config.chat_url();
        debug!(%url, %model, message_count, "sending chat completion request");

        let response = self.client.post(&url, headers, body).await?;
        self.parser.parse_response(response).await
    }
}
