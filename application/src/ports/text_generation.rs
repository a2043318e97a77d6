//! Text generation provider port
//!
//! Defines the single call the answer generator makes to an external
//! text-generation provider.

use async_trait::async_trait;
use thiserror::Error;

/// One provider request: system prompt, user question and output bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model_id: String,
    pub system_prompt: String,
    pub question: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Errors reported by a provider, as a code/message pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider rejected the request [{code}]: {message}")]
    Rejected { code: String, message: String },

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

impl ProviderError {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable code, used in logs and events.
    pub fn code(&self) -> &str {
        match self {
            ProviderError::Rejected { code, .. } => code,
            ProviderError::ModelNotAvailable(_) => "model_not_available",
            ProviderError::ConnectionError(_) => "connection_error",
            ProviderError::EmptyResponse => "empty_response",
            ProviderError::Timeout => "timeout",
        }
    }
}

/// Adapter for an external text-generation provider.
///
/// Implementations issue exactly one request per call and never retry;
/// retrying is the answer generator's decision.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Provider name for logs ("mock", "bedrock", ...).
    fn name(&self) -> &str;

    /// Generate text for one request.
    async fn complete(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}
