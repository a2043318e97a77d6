//! Orchestration result value objects.

use super::field_meta::FieldMeta;
use crate::publishing::entities::{CommentOutcome, PublishedPost};
use serde::{Deserialize, Serialize};

/// Marker for what the caller should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    /// The turn is finished.
    #[default]
    Completed,
}

impl NextStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextStep::Completed => "completed",
        }
    }
}

/// What a caller receives once a turn is done.
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestrationResult {
    /// User-facing reply; the raw answer, or the answer plus publish notes.
    pub reply: String,
    /// Raw generated answer.
    pub answer: String,
    pub published_post: Option<PublishedPost>,
    pub comment: CommentOutcome,
    pub next_step: NextStep,
    pub meta: FieldMeta,
}

impl OrchestrationResult {
    /// A turn that ended right after generation.
    pub fn answer_only(answer: impl Into<String>) -> Self {
        let answer = answer.into();
        Self {
            reply: answer.clone(),
            answer,
            published_post: None,
            comment: CommentOutcome::not_attempted(),
            next_step: NextStep::Completed,
            meta: FieldMeta::chat_form(),
        }
    }

    /// A turn whose answer was published, with or without its comment.
    pub fn published(answer: impl Into<String>, post: PublishedPost, comment: CommentOutcome) -> Self {
        let answer = answer.into();
        Self {
            reply: compose_reply(&answer, &post, &comment),
            answer,
            published_post: Some(post),
            comment,
            next_step: NextStep::Completed,
            meta: FieldMeta::chat_form(),
        }
    }

    pub fn is_published(&self) -> bool {
        self.published_post.is_some()
    }
}

/// Reply text for a published answer.
///
/// The comment line is only added when the comment was actually created.
pub fn compose_reply(answer: &str, post: &PublishedPost, comment: &CommentOutcome) -> String {
    let mut reply = match post.post_id {
        Some(number) => format!("{}\n\nPost created. Post number: {}", answer, number),
        None => format!("{}\n\nPost created.", answer),
    };
    if comment.created {
        reply.push_str("\nThe AI answer was attached as a comment.");
    }
    reply
}
