//! Response types for completion calls

use std::fmt;

/// Metadata about a response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    /// Model used for generation
    pub model: Option<String>,
    /// Unique ID for this response
    pub id: Option<String>,
    /// Usage statistics
    pub usage: Option<Usage>,
    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

/// Token usage statistics reported by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of message
    Stop,
    /// Hit max_tokens limit
    Length,
    /// Content was filtered
    ContentFilter,
}

/// A complete response from a completion service
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The generated content of the first choice
    pub content: String,
    /// Response metadata
    pub metadata: ResponseMetadata,
}

impl Response {
    /// Create a simple text response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: ResponseMetadata::default(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::Length => write!(f, "length"),
            FinishReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}
