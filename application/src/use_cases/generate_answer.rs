//! Generate Answer use case.
//!
//! Wraps the single call to the text-generation provider: builds the
//! request from the system prompt and the question, applies the retry
//! policy, and normalizes every provider fault into a [`GenerationError`].
//!
//! When a turn asks for a simulated error, the use case runs the
//! simulation policy against a model id the provider rejects and then fails
//! unconditionally. That path exists to exercise the caller's failure
//! handling and never yields an answer.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::text_generation::{GenerationRequest, ProviderError, TextGenerationProvider};
use qna_domain::util::preview;
use qna_domain::{GenerationMode, GenerationSettings, Question, RetryPolicy};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// User-safe text shown for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "A temporary error occurred. Please ask your question again.";

/// Errors that can occur while generating an answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Generation failed after {attempts} attempt(s): {source}")]
    Provider {
        attempts: u32,
        #[source]
        source: ProviderError,
    },

    #[error("No acceptable answer after {attempts} attempt(s)")]
    Rejected { attempts: u32 },

    #[error("Simulated generation failure after {attempts} attempt(s)")]
    SimulatedFailure { attempts: u32 },
}

impl GenerationError {
    /// Number of provider calls made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            GenerationError::Provider { attempts, .. }
            | GenerationError::Rejected { attempts }
            | GenerationError::SimulatedFailure { attempts } => *attempts,
        }
    }

    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

/// Why the last attempt of a policy run failed.
enum AttemptFailure {
    Provider(ProviderError),
    Rejected,
}

/// Use case for generating one answer.
#[derive(Clone)]
pub struct GenerateAnswerUseCase {
    provider: Arc<dyn TextGenerationProvider>,
    settings: GenerationSettings,
    system_prompt: Arc<str>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateAnswerUseCase {
    pub fn new(
        provider: Arc<dyn TextGenerationProvider>,
        settings: GenerationSettings,
        system_prompt: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            provider,
            settings,
            system_prompt: system_prompt.into(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.settings.mode
    }

    /// Generate an answer for `question`.
    ///
    /// With `simulate_error` set this always fails with
    /// [`GenerationError::SimulatedFailure`] after the configured number of
    /// attempts.
    pub async fn execute(
        &self,
        question: &Question,
        simulate_error: bool,
    ) -> Result<String, GenerationError> {
        if simulate_error {
            return Err(self.simulate_failure(question).await);
        }

        info!(
            provider = self.provider.name(),
            "Generating answer: {}",
            preview(question.content(), 100)
        );

        let request = self.build_request(&self.settings.model_id, question);
        let policy = &self.settings.retry;

        match self.run_policy(&request, policy, false).await {
            Ok(answer) => Ok(answer),
            Err((attempts, failure)) => {
                let err = match failure {
                    AttemptFailure::Provider(source) => GenerationError::Provider { attempts, source },
                    AttemptFailure::Rejected => GenerationError::Rejected { attempts },
                };
                error!(attempts, "Answer generation failed: {}", err);
                self.log_failure(&err, false);
                Err(err)
            }
        }
    }

    async fn simulate_failure(&self, question: &Question) -> GenerationError {
        let policy = self.settings.simulation.policy();
        warn!(
            attempts = policy.max_attempts,
            model = %self.settings.simulation.invalid_model_id,
            "Running simulated generation failure"
        );

        if policy.can_succeed() {
            warn!("Simulation policy accepts replies; any answer is discarded");
        }

        let request = self.build_request(&self.settings.simulation.invalid_model_id, question);
        let _ = self.run_policy(&request, &policy, true).await;

        let err = GenerationError::SimulatedFailure {
            attempts: policy.max_attempts,
        };
        error!(attempts = policy.max_attempts, "Maximum attempts exceeded; failing the turn");
        self.log_failure(&err, true);
        err
    }

    fn build_request(&self, model_id: &str, question: &Question) -> GenerationRequest {
        GenerationRequest {
            model_id: model_id.to_string(),
            system_prompt: self.system_prompt.to_string(),
            question: question.content().to_string(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Call the provider until the policy accepts a reply or runs out of
    /// attempts. Returns the attempt count with the last failure.
    async fn run_policy(
        &self,
        request: &GenerationRequest,
        policy: &RetryPolicy,
        simulated: bool,
    ) -> Result<String, (u32, AttemptFailure)> {
        let mut attempt = 1;
        loop {
            let started = Instant::now();
            let outcome =
                match tokio::time::timeout(self.settings.timeout, self.provider.complete(request))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(ProviderError::Timeout),
                };
            let duration_ms = started.elapsed().as_millis() as u64;

            let failure = match outcome {
                Ok(text) if policy.acceptance.accepts(&text) => {
                    info!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        duration_ms,
                        "Generation attempt succeeded ({} chars)",
                        text.chars().count()
                    );
                    self.log_attempt(request, policy, attempt, duration_ms, simulated, None);
                    return Ok(text);
                }
                Ok(text) => {
                    warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        duration_ms,
                        "Generation attempt rejected ({} chars)",
                        text.chars().count()
                    );
                    AttemptFailure::Rejected
                }
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        duration_ms,
                        code = e.code(),
                        "Generation attempt failed: {}",
                        e
                    );
                    AttemptFailure::Provider(e)
                }
            };
            self.log_attempt(request, policy, attempt, duration_ms, simulated, Some(&failure));

            if !policy.allows_retry_after(attempt) {
                return Err((attempt, failure));
            }

            if !policy.delay.is_zero() {
                debug!(delay_ms = policy.delay.as_millis() as u64, "Waiting before next attempt");
                tokio::time::sleep(policy.delay).await;
            }
            attempt += 1;
        }
    }

    fn log_attempt(
        &self,
        request: &GenerationRequest,
        policy: &RetryPolicy,
        attempt: u32,
        duration_ms: u64,
        simulated: bool,
        failure: Option<&AttemptFailure>,
    ) {
        let (outcome, error_code) = match failure {
            None => ("ok", None),
            Some(AttemptFailure::Rejected) => ("rejected", None),
            Some(AttemptFailure::Provider(e)) => ("error", Some(e.code().to_string())),
        };
        self.conversation_logger.log(ConversationEvent::new(
            "generation_attempt",
            serde_json::json!({
                "provider": self.provider.name(),
                "model": request.model_id,
                "attempt": attempt,
                "max_attempts": policy.max_attempts,
                "duration_ms": duration_ms,
                "outcome": outcome,
                "error_code": error_code,
                "simulated": simulated,
            }),
        ));
    }

    fn log_failure(&self, err: &GenerationError, simulated: bool) {
        self.conversation_logger.log(ConversationEvent::new(
            "generation_failed",
            serde_json::json!({
                "attempts": err.attempts(),
                "error": err.to_string(),
                "simulated": simulated,
            }),
        ));
    }
}
