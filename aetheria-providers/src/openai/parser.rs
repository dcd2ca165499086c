//! Response parsing for OpenAI

use crate::constants::OPENAI_PROVIDER_NAME;
use crate::error;
use crate::traits::ResponseParser;
use aetheria_core::{Error, FinishReason, Response, ResponseMetadata, Usage};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Parses chat completion responses
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIParser;

#[async_trait]
impl ResponseParser for OpenAIParser {
    async fn parse_response(&self, value: Value) -> Result<Response, Error> {
        let response: OpenAIResponse =
            serde_json::from_value(value).map_err(error::serialization_error)?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            error::to_core_error(OPENAI_PROVIDER_NAME, "No choices in response")
        })?;

        let content = choice.message.content.ok_or_else(|| Error::ResponseError {
            message: "First choice carries no message content".to_string(),
        })?;

        let metadata = ResponseMetadata {
            model: response.model,
            id: response.id,
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(parse_finish_reason),
        };

        Ok(Response { content, metadata })
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// Response structures
#[derive(Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
