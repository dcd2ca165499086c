//! HTTP client abstraction and utilities

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error;
use aetheria_core::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// HTTP client abstraction
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a JSON body and decode the JSON reply
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(error::status_error(status, &text));
        }

        response.json().await.map_err(|e| Error::ResponseError {
            message: format!("Response body is not valid JSON: {}", e),
        })
    }
}

/// Helper to create common headers
pub fn create_headers(api_key: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {}", e)))?,
    );

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_headers() {
        let headers = create_headers("sk-test").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_create_headers_rejects_invalid_key() {
        let result = create_headers("bad\nkey");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
