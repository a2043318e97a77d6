//! Publishing client port
//!
//! Two sequential calls to the content backend: create a post, then attach
//! a comment to it. Both are single-attempt.

use async_trait::async_trait;
use qna_domain::{PostDraft, PublishedPost};
use thiserror::Error;

/// Errors from a single content-backend call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishingError {
    #[error("Content backend responded with status {status}")]
    Status { status: u16 },

    #[error("Content backend unreachable: {0}")]
    Transport(String),

    #[error("Content backend timed out")]
    Timeout,

    #[error("Invalid response from content backend: {0}")]
    InvalidResponse(String),
}

/// Adapter for the downstream content backend.
#[async_trait]
pub trait PublishingClient: Send + Sync {
    /// Create a post from `draft` with `content` as its body.
    async fn create_post(
        &self,
        draft: &PostDraft,
        content: &str,
    ) -> Result<PublishedPost, PublishingError>;

    /// Attach a comment to the post with internal id `post_id`.
    ///
    /// Authorized with the service credential, never the post password.
    async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
        is_machine_generated: bool,
    ) -> Result<(), PublishingError>;
}
