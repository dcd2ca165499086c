//! Request conversion for OpenAI

use crate::traits::RequestConverter;
use aetheria_core::{Error, Message, Request};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Converts generic requests to the chat completions wire format
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIConverter;

#[async_trait]
impl RequestConverter for OpenAIConverter {
    async fn convert_request(&self, request: Request) -> Result<Value, Error> {
        let mut body = json!({
            "model": request.model.to_string(),
            "messages": convert_messages(&request.messages),
            "stream": false,
        });

        if let Some(max_tokens) = request.parameters.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.parameters.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(top_p) = request.parameters.top_p {
            body["top_p"] = json!(top_p);
        }

        Ok(body)
    }
}

fn convert_messages(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|msg| {
            json!({
                "role": msg.role.as_str(),
                "content": msg.content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aetheria_core::Parameters;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_request() {
        let request = Request::builder()
            .message(Message::system("You are a career coach"))
            .message(Message::user("How do I negotiate salary?"))
            .model("meta-llama/Llama-Vision-Free")
            .parameters(
                Parameters::builder()
                    .max_tokens(512)
                    .temperature(0.5)
                    .top_p(1.0)
                    .build(),
            )
            .build()
            .unwrap();

        let body = tokio_test::block_on(OpenAIConverter.convert_request(request)).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "meta-llama/Llama-Vision-Free",
                "messages": [
                    {"role": "system", "content": "You are a career coach"},
                    {"role": "user", "content": "How do I negotiate salary?"}
                ],
                "stream": false,
                "max_tokens": 512,
                "temperature": 0.5,
                "top_p": 1.0
            })
        );
    }

    #[test]
    fn test_convert_request_omits_unset_parameters() {
        let request = Request::builder()
            .message(Message::user("hi"))
            .model("gpt-4")
            .build()
            .unwrap();

        let body = tokio_test::block_on(OpenAIConverter.convert_request(request)).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
        assert!(body.get("top_p").is_none());
    }
}
