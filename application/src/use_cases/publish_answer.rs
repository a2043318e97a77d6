//! Publish Answer use case.
//!
//! Creates the post on the content backend, then attaches the generated
//! answer to it as a machine-generated comment. Post failure is an error;
//! comment failure only downgrades the [`CommentOutcome`].

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::publishing::{PublishingClient, PublishingError};
use qna_domain::{CommentOutcome, PostDraft, PublishedPost};
use std::sync::Arc;
use tracing::{info, warn};

/// User-safe reason reported when the comment could not be attached.
pub const COMMENT_FAILED_MESSAGE: &str = "Failed to attach the AI answer as a comment.";

/// Use case for publishing a question and its answer.
#[derive(Clone)]
pub struct PublishAnswerUseCase {
    client: Arc<dyn PublishingClient>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl PublishAnswerUseCase {
    pub fn new(client: Arc<dyn PublishingClient>) -> Self {
        Self {
            client,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Create the post. No comment is attempted here.
    pub async fn create_post(
        &self,
        draft: &PostDraft,
        question: &str,
    ) -> Result<PublishedPost, PublishingError> {
        match self.client.create_post(draft, question).await {
            Ok(post) => {
                info!(post_id = post.post_id, "Post created");
                self.conversation_logger.log(ConversationEvent::new(
                    "post_created",
                    serde_json::json!({ "id": post.id, "post_id": post.post_id }),
                ));
                Ok(post)
            }
            Err(e) => {
                warn!("Failed to create post: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "post_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                Err(e)
            }
        }
    }

    /// Attach `answer` to `post` as a machine-generated comment.
    ///
    /// Never fails: a backend error becomes a failed [`CommentOutcome`].
    pub async fn attach_answer(&self, post: &PublishedPost, answer: &str) -> CommentOutcome {
        match self.client.create_comment(&post.id, answer, true).await {
            Ok(()) => {
                info!(post_id = post.post_id, "AI answer attached as comment");
                self.conversation_logger.log(ConversationEvent::new(
                    "comment_created",
                    serde_json::json!({ "post": post.id }),
                ));
                CommentOutcome::created()
            }
            Err(e) => {
                warn!(post_id = post.post_id, "Comment creation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "comment_failed",
                    serde_json::json!({ "post": post.id, "error": e.to_string() }),
                ));
                CommentOutcome::failed(COMMENT_FAILED_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FakePublisher, RecordingLogger, draft};

    #[tokio::test]
    async fn test_post_then_machine_generated_comment() {
        let client = Arc::new(FakePublisher::new());
        let use_case = PublishAnswerUseCase::new(client.clone());

        let post = use_case.create_post(&draft(), "Q").await.unwrap();
        let outcome = use_case.attach_answer(&post, "A").await;

        assert_eq!(client.posted_content(), vec!["Q".to_string()]);
        assert_eq!(outcome, CommentOutcome::created());
        let comments = client.comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].post_id, post.id);
        assert_eq!(comments[0].content, "A");
        assert!(comments[0].is_machine_generated);
    }

    #[tokio::test]
    async fn test_comment_failure_is_an_outcome_not_an_error() {
        let client = Arc::new(FakePublisher::failing_comment());
        let logger = Arc::new(RecordingLogger::default());
        let use_case =
            PublishAnswerUseCase::new(client.clone()).with_conversation_logger(logger.clone());

        let post = use_case.create_post(&draft(), "Q").await.unwrap();
        let outcome = use_case.attach_answer(&post, "A").await;

        assert!(!outcome.created);
        assert_eq!(outcome.failure_reason.as_deref(), Some(COMMENT_FAILED_MESSAGE));
        assert_eq!(logger.event_types(), vec!["post_created", "comment_failed"]);
    }

    #[tokio::test]
    async fn test_post_failure_is_returned() {
        let client = Arc::new(FakePublisher::failing_post());
        let use_case = PublishAnswerUseCase::new(client);

        let err = use_case.create_post(&draft(), "Q").await.unwrap_err();
        assert_eq!(err, PublishingError::Status { status: 500 });
    }
}
