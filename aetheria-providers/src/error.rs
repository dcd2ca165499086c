//! Provider-specific error helpers

use aetheria_core::Error as CoreError;
use reqwest::StatusCode;

/// Convert provider errors to core errors
pub fn to_core_error(provider: impl Into<String>, message: impl Into<String>) -> CoreError {
    CoreError::Provider {
        provider: provider.into(),
        message: message.into(),
    }
}

/// Convert network errors to core errors
pub fn network_error(error: reqwest::Error) -> CoreError {
    CoreError::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub fn serialization_error(error: serde_json::Error) -> CoreError {
    CoreError::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert a non-success HTTP status and body to a core error
///
/// Rejected credentials map to [`CoreError::Authentication`]; every other
/// status is reported as a network fault.
pub fn status_error(status: StatusCode, body: &str) -> CoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CoreError::Authentication(format!("HTTP {}: {}", status, body))
        }
        _ => CoreError::Network {
            message: format!("HTTP {}: {}", status, body),
            source: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        let error = status_error(StatusCode::UNAUTHORIZED, "bad key");
        assert!(matches!(error, CoreError::Authentication(ref m) if m.contains("bad key")));

        let error = status_error(StatusCode::FORBIDDEN, "");
        assert!(matches!(error, CoreError::Authentication(_)));

        let error = status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(error, CoreError::Network { ref message, .. } if message.contains("500")));
    }

    #[test]
    fn test_to_core_error() {
        let error = to_core_error("openai", "No choices in response");
        assert_eq!(
            error.to_string(),
            "Provider error (openai): No choices in response"
        );
    }
}
