use aetheria_core::Message;
use std::sync::Arc;
use tiktoken_rs::CoreBPE;
use tracing::debug;

use crate::error::ContextError;

/// Encoding used when the model is unknown to tiktoken
pub const FALLBACK_ENCODING: &str = "cl100k_base";

pub trait TokenCounter: Send + Sync {
    fn count_text(&self, text: &str) -> usize;

    /// Tokens of the message content. Role and framing overhead are not
    /// counted, so budgets compare against content size only.
    fn count_message(&self, message: &Message) -> usize {
        self.count_text(&message.content)
    }

    fn count_messages(&self, messages: &[Message]) -> usize {
        messages.iter().map(|msg| self.count_message(msg)).sum()
    }

    /// The model identifier this counter was built for
    fn model_name(&self) -> &str;
}

/// Builds a [`TokenCounter`] for a model identifier.
pub trait Tokenizer: Send + Sync {
    fn counter(&self, model: &str) -> Result<Arc<dyn TokenCounter>, ContextError>;
}

pub struct TiktokenCounter {
    encoder: Arc<CoreBPE>,
    model: String,
}

impl TiktokenCounter {
    /// Select the model's encoding, falling back to `cl100k_base` when tiktoken
    /// does not recognize the model.
    pub fn for_model(model: &str) -> Result<Self, ContextError> {
        let encoder = match tiktoken_rs::get_bpe_from_model(model) {
            Ok(encoder) => encoder,
            Err(e) => {
                debug!(
                    model,
                    error = %e,
                    "unknown model for tokenization, using {}", FALLBACK_ENCODING
                );
                tiktoken_rs::cl100k_base().map_err(|e| ContextError::Tiktoken(e.to_string()))?
            }
        };

        Ok(Self {
            encoder: Arc::new(encoder),
            model: model.to_string(),
        })
    }

    pub fn with_encoder(encoder: CoreBPE, model: impl Into<String>) -> Self {
        Self {
            encoder: Arc::new(encoder),
            model: model.into(),
        }
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_text(&self, text: &str) -> usize {
        self.encoder.encode_ordinary(text).len()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TiktokenTokenizer;

impl Tokenizer for TiktokenTokenizer {
    fn counter(&self, model: &str) -> Result<Arc<dyn TokenCounter>, ContextError> {
        Ok(Arc::new(TiktokenCounter::for_model(model)?))
    }
}

/// Count the tokens of `text` under `model`'s encoding.
pub fn count_tokens(text: &str, model: &str) -> Result<usize, ContextError> {
    Ok(TiktokenCounter::for_model(model)?.count_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_model_counts_tokens() {
        let counter = TiktokenCounter::for_model("gpt-4").unwrap();
        assert_eq!(counter.model_name(), "gpt-4");
        assert_eq!(counter.count_text("This is a test      with spaces"), 7);
    }

    #[test]
    fn test_unknown_model_falls_back() {
        let fallback = TiktokenCounter::for_model("meta-llama/Llama-Vision-Free").unwrap();
        let reference = TiktokenCounter::with_encoder(tiktoken_rs::cl100k_base().unwrap(), "ref");

        let text = "Tailor your resume for each job application.";
        assert_eq!(fallback.count_text(text), reference.count_text(text));
        assert_eq!(fallback.model_name(), "meta-llama/Llama-Vision-Free");
    }

    #[test]
    fn test_counting_is_deterministic() {
        let text = "How should I prepare for a system design interview?";
        let first = count_tokens(text, "M2-BERT-Retrieval-32k").unwrap();
        let second = count_tokens(text, "M2-BERT-Retrieval-32k").unwrap();
        assert_eq!(first, second);
        assert!(first > 0);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert_eq!(count_tokens("", "gpt-4").unwrap(), 0);
    }

    #[test]
    fn test_message_counts_content_only() {
        let counter = TiktokenTokenizer.counter("gpt-4").unwrap();
        let message = Message::user("Hello, world!");

        assert_eq!(
            counter.count_message(&message),
            counter.count_text("Hello, world!")
        );

        let messages = vec![
            Message::system("You are a career coach."),
            Message::user("Hello!"),
            Message::assistant("Hi there!"),
        ];
        let expected: usize = messages.iter().map(|m| counter.count_text(&m.content)).sum();
        assert_eq!(counter.count_messages(&messages), expected);
    }
}
