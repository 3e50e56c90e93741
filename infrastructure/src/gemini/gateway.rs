//! Gemini LLM Gateway implementation

use super::protocol::{GenerateContentRequest, parse_response};
use crate::config::FileAiConfig;
use async_trait::async_trait;
use prep_application::{GatewayError, LlmGateway};
use prep_domain::util::truncate_str;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP gateway to a Gemini-style `generateContent` API
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiLlmGateway {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Build from `[ai]` config.
    ///
    /// Returns `Ok(None)` when no API key is configured, so callers fall
    /// back without attempting a network call.
    pub fn from_config(config: &FileAiConfig) -> Result<Option<Self>, GatewayError> {
        let Some(api_key) = config.resolve_api_key() else {
            info!(
                "No API key found (checked [ai].api_key and ${}), AI summaries disabled",
                config.api_key_env
            );
            return Ok(None);
        };

        let timeout = config.to_narrative_params().timeout;
        let gateway = Self::new(api_key, &config.base_url, &config.model, timeout)?;
        info!("GeminiLlmGateway initialized (model: {})", gateway.model);
        Ok(Some(gateway))
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!("POST {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            warn!("Gemini API returned {}", status);
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_str(&body, 200)
            )));
        }

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let gateway =
            GeminiLlmGateway::new("key", "https://example.test/", "gemini-pro", None).unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(gateway.model_name(), "gemini-pro");
    }

    #[test]
    fn test_from_config_without_key_is_none() {
        let config = FileAiConfig {
            api_key_env: "EXAM_PREP_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert!(GeminiLlmGateway::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_from_config_with_explicit_key() {
        let config = FileAiConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let gateway = GeminiLlmGateway::from_config(&config).unwrap().unwrap();
        assert_eq!(gateway.model_name(), FileAiConfig::default().model);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let gateway = GeminiLlmGateway::new(
            "key",
            "http://127.0.0.1:9",
            "gemini-pro",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        assert!(gateway.generate("hello").await.is_err());
    }
}
