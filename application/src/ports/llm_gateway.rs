//! LLM Gateway port
//!
//! Defines the interface for the external text-generation provider.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text generation
///
/// A single call taking a prompt and returning generated text. An adapter
/// only exists when a credential is configured; an unconfigured provider is
/// represented by the absence of a gateway, not by an erroring one.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model identifier, for logs
    fn model_name(&self) -> &str;

    /// Generate text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
