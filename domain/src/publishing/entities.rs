//! Entities returned by the content backend.

use serde::{Deserialize, Serialize};

/// A post as acknowledged by the content backend.
///
/// Generated entirely by the backend; the relay only threads it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    /// Internal identifier, used to attach comments.
    pub id: String,
    /// Sequential, user-facing post number, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    /// Confirmation message from the backend.
    pub message: String,
}

/// Result of attaching the generated answer as a comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentOutcome {
    pub created: bool,
    pub failure_reason: Option<String>,
}

impl CommentOutcome {
    pub fn created() -> Self {
        Self {
            created: true,
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            created: false,
            failure_reason: Some(reason.into()),
        }
    }

    /// No comment was attempted (nothing was published).
    pub fn not_attempted() -> Self {
        Self::default()
    }
}
