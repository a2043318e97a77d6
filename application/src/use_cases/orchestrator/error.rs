//! Orchestrator errors and their outward categories.

use crate::ports::publishing::PublishingError;
use crate::use_cases::generate_answer::{GENERATION_FAILED_MESSAGE, GenerationError};
use qna_domain::DomainError;
use thiserror::Error;

/// User-safe text shown when the post could not be created.
pub const PUBLISH_FAILED_MESSAGE: &str =
    "An error occurred while creating the post. Please try again shortly.";

/// How an error is presented to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or missing input; nothing external was called.
    BadInput,
    /// The generation provider or the content backend failed.
    UpstreamUnavailable,
}

/// Errors that end a turn.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Invalid request: {0}")]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Post creation failed after an answer was generated.
    #[error("Publishing failed: {source}")]
    Publish {
        answer: String,
        #[source]
        source: PublishingError,
    },
}

impl OrchestratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrchestratorError::Validation(_) => ErrorCategory::BadInput,
            OrchestratorError::Generation(_) | OrchestratorError::Publish { .. } => {
                ErrorCategory::UpstreamUnavailable
            }
        }
    }

    /// Message safe to show to the caller. Never contains provider or backend text.
    pub fn user_message(&self) -> String {
        match self {
            OrchestratorError::Validation(e) => e.to_string(),
            OrchestratorError::Generation(_) => GENERATION_FAILED_MESSAGE.to_string(),
            OrchestratorError::Publish { .. } => PUBLISH_FAILED_MESSAGE.to_string(),
        }
    }

    /// The answer generated before the failure, if any.
    pub fn generated_answer(&self) -> Option<&str> {
        match self {
            OrchestratorError::Publish { answer, .. } => Some(answer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generation::ProviderError;

    #[test]
    fn test_categories() {
        assert_eq!(
            OrchestratorError::from(DomainError::MissingPostData).category(),
            ErrorCategory::BadInput
        );
        assert_eq!(
            OrchestratorError::from(GenerationError::SimulatedFailure { attempts: 3 }).category(),
            ErrorCategory::UpstreamUnavailable
        );
    }

    #[test]
    fn test_user_message_hides_upstream_text() {
        let err = OrchestratorError::from(GenerationError::Provider {
            attempts: 1,
            source: ProviderError::rejected("AccessDenied", "arn:aws:iam::123 is not authorized"),
        });
        assert!(!err.user_message().contains("arn:aws"));

        let err = OrchestratorError::Publish {
            answer: "A".to_string(),
            source: PublishingError::Transport("10.0.0.7:3001 refused".to_string()),
        };
        assert_eq!(err.user_message(), PUBLISH_FAILED_MESSAGE);
        assert_eq!(err.generated_answer(), Some("A"));
    }
}
