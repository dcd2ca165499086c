//! Request types for completion calls

use crate::types::message::Message;

/// A model identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(pub String);

impl Model {
    /// Create a new model identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sampling parameters for a completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for randomness
    pub temperature: Option<f32>,
    /// Top-p nucleus sampling
    pub top_p: Option<f32>,
}

impl Parameters {
    /// Create a new parameters builder
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }
}

/// Builder for Parameters
#[derive(Default)]
pub struct ParametersBuilder {
    params: Parameters,
}

impl ParametersBuilder {
    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.params.max_tokens = Some(tokens);
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.params.temperature = Some(temp);
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.params.top_p = Some(p);
        self
    }

    /// Build the parameters
    pub fn build(self) -> Parameters {
        self.params
    }
}

/// A request to a completion service
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The conversation messages, system message first
    pub messages: Vec<Message>,
    /// The model to use
    pub model: Model,
    /// Sampling parameters
    pub parameters: Parameters,
}

impl Request {
    /// Create a new request builder
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }
}

/// Builder for Request
#[derive(Default)]
pub struct RequestBuilder {
    messages: Vec<Message>,
    model: Option<Model>,
    parameters: Parameters,
}

impl RequestBuilder {
    /// Add a message
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set parameters
    pub fn parameters(mut self, params: Parameters) -> Self {
        self.parameters = params;
        self
    }

    /// Try to build the request
    ///
    /// Fails when no model was set or no messages were added.
    pub fn build(self) -> crate::Result<Request> {
        let model = self
            .model
            .ok_or_else(|| crate::Error::Validation("Request must name a model".to_string()))?;

        if self.messages.is_empty() {
            return Err(crate::Error::Validation(
                "Request must contain at least one message".to_string(),
            ));
        }

        Ok(Request {
            messages: self.messages,
            model,
            parameters: self.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_model_creation() {
        let model = Model::new("meta-llama/Llama-Vision-Free");
        assert_eq!(model.as_str(), "meta-llama/Llama-Vision-Free");

        let model: Model = "gpt-4".into();
        assert_eq!(model.to_string(), "gpt-4");
    }

    #[test]
    fn test_parameters_builder() {
        let params = Parameters::builder()
            .max_tokens(512)
            .temperature(0.7)
            .top_p(1.0)
            .build();

        assert_eq!(params.max_tokens, Some(512));
        assert_eq!(params.temperature, Some(0.7));
        assert_eq!(params.top_p, Some(1.0));
    }

    #[test]
    fn test_request_builder() {
        let request = Request::builder()
            .message(Message::system("You are a career coach"))
            .message(Message::user("Review my cv"))
            .model("gpt-4")
            .parameters(Parameters::builder().temperature(0.2).build())
            .build()
            .unwrap();

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.model.as_str(), "gpt-4");
        assert_eq!(request.parameters.temperature, Some(0.2));
    }

    #[test]
    fn test_request_builder_requires_messages() {
        let result = Request::builder().model("gpt-4").build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_request_builder_requires_model() {
        let result = Request::builder().message(Message::user("hi")).build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
