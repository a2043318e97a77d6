//! Offline provider used in mock mode and tests.

use async_trait::async_trait;
use qna_application::{GenerationRequest, ProviderError, TextGenerationProvider};
use qna_domain::mock_answer;
use std::collections::HashSet;

/// Deterministic provider that never leaves the process.
///
/// Every request receives [`mock_answer`] for its question, except requests
/// naming a model id registered with [`MockProvider::rejecting`], which fail
/// the way a real provider rejects an unknown model.
#[derive(Debug, Default, Clone)]
pub struct MockProvider {
    rejected_models: HashSet<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(mut self, model_id: impl Into<String>) -> Self {
        self.rejected_models.insert(model_id.into());
        self
    }
}

#[async_trait]
impl TextGenerationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        if self.rejected_models.contains(&request.model_id) {
            return Err(ProviderError::rejected(
                "ValidationException",
                format!("The provided model identifier is invalid: {}", request.model_id),
            ));
        }
        Ok(mock_answer(&request.question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model_id: &str) -> GenerationRequest {
        GenerationRequest {
            model_id: model_id.to_string(),
            system_prompt: "prompt".to_string(),
            question: "What is log aggregation?".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn test_answers_deterministically() {
        let provider = MockProvider::new();
        let first = provider.complete(&request("any")).await.unwrap();
        let second = provider.complete(&request("any")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, mock_answer("What is log aggregation?"));
    }

    #[tokio::test]
    async fn test_rejects_registered_model() {
        let provider = MockProvider::new().rejecting("bad-model");
        let err = provider.complete(&request("bad-model")).await.unwrap_err();
        assert_eq!(err.code(), "ValidationException");
        assert!(provider.complete(&request("good-model")).await.is_ok());
    }
}
