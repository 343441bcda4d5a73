//! Text-generation provider client
//!
//! The provider boundary is a single method: prompt text in, reply text
//! out. The HTTP implementation posts to a configurable endpoint with a
//! bearer credential; the credential is validated before any network call
//! is attempted, so a misconfigured deployment fails fast with a
//! configuration error rather than a request error. A failed or malformed
//! reply is surfaced once — no automatic retry.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerationError, Result};

/// Minimum plausible credential length
pub const MIN_CREDENTIAL_LEN: usize = 16;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Provider Seam
// =============================================================================

/// Anything that can turn an instruction into reply text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one instruction and return the raw reply text
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the HTTP provider client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base service URL (e.g., "https://text.provider.example")
    pub service_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model identifier passed through to the provider
    pub model: String,
    /// Output-token budget for one reply
    pub max_output_tokens: u32,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
}

impl ProviderConfig {
    /// Create a config with a service URL and credential
    pub fn new(service_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            api_key: api_key.into(),
            model: "theme-composer-1".to_string(),
            max_output_tokens: 4096,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("Prism-Studio/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the output-token budget
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Validate the credential before any request is attempted
    ///
    /// Absence or implausible shortness is a configuration error, not a
    /// runtime error.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::Configuration(
                "provider credential is missing".to_string(),
            ));
        }
        if self.api_key.trim().len() < MIN_CREDENTIAL_LEN {
            return Err(GenerationError::Configuration(format!(
                "provider credential is too short ({} chars, expected at least {})",
                self.api_key.trim().len(),
                MIN_CREDENTIAL_LEN
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    model: &'a str,
    input: &'a str,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateReply {
    output_text: String,
}

/// Standard provider error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderErrorResponse {
    /// Error code
    pub error: String,
    /// Error message
    pub message: String,
}

// =============================================================================
// HTTP Client
// =============================================================================

/// HTTP implementation of [`TextGenerator`]
#[derive(Debug, Clone)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpTextGenerator {
    /// Build a client, validating the credential first
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/generate", self.config.service_url);
        let body = GenerateBody {
            model: &self.config.model,
            input: prompt,
            max_output_tokens: self.config.max_output_tokens,
        };

        debug!(url = %url, prompt_len = prompt.len(), "sending generation request");

        let mut req = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body);
        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        let response = req.send().await.map_err(|e| GenerationError::Provider {
            status: 0,
            message: format!("request failed: {}", e),
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();

            // Prefer the provider's structured error when it sends one
            return match serde_json::from_str::<ProviderErrorResponse>(&error_body) {
                Ok(parsed) => Err(GenerationError::Provider {
                    status,
                    message: format!("{}: {}", parsed.error, parsed.message),
                }),
                Err(_) => Err(GenerationError::Provider {
                    status,
                    message: format!("HTTP {}: {}", status, error_body),
                }),
            };
        }

        let reply: GenerateReply =
            response
                .json()
                .await
                .map_err(|e| GenerationError::Provider {
                    status,
                    message: format!("failed to read reply body: {}", e),
                })?;

        Ok(reply.output_text)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "pk-test-0123456789abcdef";

    #[test]
    fn test_credential_validation() {
        assert!(ProviderConfig::new("https://svc", TEST_KEY).validate().is_ok());

        let missing = ProviderConfig::new("https://svc", "");
        assert!(matches!(
            missing.validate(),
            Err(GenerationError::Configuration(_))
        ));

        let short = ProviderConfig::new("https://svc", "pk-short");
        assert!(matches!(
            short.validate(),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_client_rejects_bad_credential_before_any_request() {
        let result = HttpTextGenerator::new(ProviderConfig::new("https://svc", "nope"));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = ProviderConfig::new("https://svc", TEST_KEY)
            .with_model("theme-composer-2")
            .with_timeout(Duration::from_secs(60))
            .with_max_output_tokens(1024)
            .with_header("X-Env", "staging");

        assert_eq!(config.model, "theme-composer-2");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_output_tokens, 1024);
        assert_eq!(config.default_headers.get("X-Env"), Some(&"staging".to_string()));
        assert!(config.user_agent.starts_with("Prism-Studio/"));
    }
}
