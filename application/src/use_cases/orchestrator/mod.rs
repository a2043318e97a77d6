//! Conversation orchestrator.
//!
//! Composes generation, the answer cache and publishing into the two entry
//! protocols:
//!
//! - **Single-shot** ([`ConversationOrchestrator::chat`]): generate, then
//!   publish and comment when the caller asked for it.
//! - **Split** ([`ConversationOrchestrator::ask`] then
//!   [`ConversationOrchestrator::post`]): `ask` generates and caches the
//!   answer under the conversation id; `post` reuses the cached answer (or
//!   regenerates it on a miss), publishes, and drops the cache entry once
//!   the post exists.
//!
//! Generation failure ends the turn before anything is published. Post
//! failure ends the turn without a comment attempt. Comment failure is a
//! partial success, reported in the result.

mod error;
mod input;

pub use error::{ErrorCategory, OrchestratorError, PUBLISH_FAILED_MESSAGE};
pub use input::{ChatInput, PostInput};

use crate::ports::answer_cache::AnswerCache;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::generate_answer::GenerateAnswerUseCase;
use crate::use_cases::publish_answer::PublishAnswerUseCase;
use qna_domain::util::preview;
use qna_domain::{
    ConversationId, ConversationTurn, OrchestrationPhase, OrchestrationResult, PostDraft, Question,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks the phase of one turn and reports every transition.
struct PhaseTracker<'a> {
    id: &'a ConversationId,
    phase: OrchestrationPhase,
    logger: &'a dyn ConversationLogger,
}

impl<'a> PhaseTracker<'a> {
    fn start(id: &'a ConversationId, logger: &'a dyn ConversationLogger) -> Self {
        Self {
            id,
            phase: OrchestrationPhase::Start,
            logger,
        }
    }

    fn advance(&mut self, next: OrchestrationPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase change {} -> {}",
            self.phase,
            next
        );
        debug!(conversation_id = %self.id, from = %self.phase, to = %next, "Phase change");
        self.logger.log(ConversationEvent::new(
            "phase_changed",
            serde_json::json!({
                "conversation_id": self.id.as_str(),
                "from": self.phase.as_str(),
                "to": next.as_str(),
                "terminal": next.is_terminal(),
            }),
        ));
        self.phase = next;
    }
}

/// The state machine behind the chat, ask and post operations.
#[derive(Clone)]
pub struct ConversationOrchestrator {
    generator: GenerateAnswerUseCase,
    publisher: PublishAnswerUseCase,
    cache: Arc<dyn AnswerCache>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConversationOrchestrator {
    pub fn new(
        generator: GenerateAnswerUseCase,
        publisher: PublishAnswerUseCase,
        cache: Arc<dyn AnswerCache>,
    ) -> Self {
        Self {
            generator,
            publisher,
            cache,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn generator(&self) -> &GenerateAnswerUseCase {
        &self.generator
    }

    /// Single-shot flow.
    pub async fn chat(&self, input: ChatInput) -> Result<OrchestrationResult, OrchestratorError> {
        let draft = input.publish_draft()?;
        let ChatInput { turn, .. } = input;

        info!(
            conversation_id = %turn.id,
            wants_to_post = draft.is_some(),
            "Chat request: {}",
            preview(turn.question.content(), 80)
        );

        let mut phase = PhaseTracker::start(&turn.id, self.conversation_logger.as_ref());
        let answer = self
            .generate(&mut phase, &turn.question, turn.simulate_error)
            .await?;

        let result = match draft {
            Some(draft) => {
                self.publish(&mut phase, &draft, &turn.question, answer)
                    .await?
            }
            None => {
                phase.advance(OrchestrationPhase::Done);
                OrchestrationResult::answer_only(answer)
            }
        };

        info!(
            conversation_id = %turn.id,
            published = result.is_published(),
            comment_created = result.comment.created,
            "Chat request completed"
        );
        Ok(result)
    }

    /// Split flow, first half: generate and cache the answer.
    pub async fn ask(&self, turn: ConversationTurn) -> Result<String, OrchestratorError> {
        info!(
            conversation_id = %turn.id,
            "Ask request: {}",
            preview(turn.question.content(), 80)
        );

        let mut phase = PhaseTracker::start(&turn.id, self.conversation_logger.as_ref());
        let answer = self
            .generate(&mut phase, &turn.question, turn.simulate_error)
            .await?;

        self.cache.put(&turn.id, answer.clone());
        self.conversation_logger.log(ConversationEvent::new(
            "answer_cached",
            serde_json::json!({ "conversation_id": turn.id.as_str(), "bytes": answer.len() }),
        ));
        phase.advance(OrchestrationPhase::Done);

        Ok(answer)
    }

    /// Split flow, second half: publish the cached answer.
    ///
    /// A cache miss regenerates the answer instead of failing. Once the post
    /// exists the entry is deleted if it still holds the published answer, so
    /// a repeated call regenerates while a newer `ask` result survives.
    pub async fn post(&self, input: PostInput) -> Result<OrchestrationResult, OrchestratorError> {
        let draft = input.draft.clone().validate()?;
        let PostInput { id, question, .. } = input;

        let mut phase = PhaseTracker::start(&id, self.conversation_logger.as_ref());
        let answer = match self.cache.get(&id) {
            Some(answer) => {
                info!(conversation_id = %id, "Post request: reusing cached answer");
                self.conversation_logger.log(ConversationEvent::new(
                    "answer_reused",
                    serde_json::json!({ "conversation_id": id.as_str() }),
                ));
                phase.advance(OrchestrationPhase::Generated);
                answer
            }
            None => {
                info!(conversation_id = %id, "Post request: no cached answer, regenerating");
                self.generate(&mut phase, &question, false).await?
            }
        };

        let result = self.publish(&mut phase, &draft, &question, answer).await?;

        if self.cache.delete_if(&id, &result.answer) {
            self.conversation_logger.log(ConversationEvent::new(
                "answer_consumed",
                serde_json::json!({ "conversation_id": id.as_str() }),
            ));
        } else {
            debug!(conversation_id = %id, "Cache holds a newer answer; keeping it");
        }

        Ok(result)
    }

    async fn generate(
        &self,
        phase: &mut PhaseTracker<'_>,
        question: &Question,
        simulate_error: bool,
    ) -> Result<String, OrchestratorError> {
        phase.advance(OrchestrationPhase::Generating);
        match self.generator.execute(question, simulate_error).await {
            Ok(answer) => {
                phase.advance(OrchestrationPhase::Generated);
                Ok(answer)
            }
            Err(e) => {
                phase.advance(OrchestrationPhase::GenerationFailed);
                Err(e.into())
            }
        }
    }

    async fn publish(
        &self,
        phase: &mut PhaseTracker<'_>,
        draft: &PostDraft,
        question: &Question,
        answer: String,
    ) -> Result<OrchestrationResult, OrchestratorError> {
        phase.advance(OrchestrationPhase::Publishing);
        let post = match self.publisher.create_post(draft, question.content()).await {
            Ok(post) => post,
            Err(source) => {
                phase.advance(OrchestrationPhase::PublishFailed);
                return Err(OrchestratorError::Publish { answer, source });
            }
        };
        phase.advance(OrchestrationPhase::Published);

        phase.advance(OrchestrationPhase::CommentAttaching);
        let comment = self.publisher.attach_answer(&post, &answer).await;
        phase.advance(if comment.created {
            OrchestrationPhase::CommentOk
        } else {
            OrchestrationPhase::CommentFailed
        });
        phase.advance(OrchestrationPhase::Done);

        Ok(OrchestrationResult::published(answer, post, comment))
    }
}
