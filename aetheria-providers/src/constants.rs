//! Constants for provider implementations

/// Default OpenAI-compatible base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider name used in errors and logs
pub const OPENAI_PROVIDER_NAME: &str = "openai";

/// Request timeout applied by the default HTTP client, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
