//! reqwest-based publishing client.

use super::types::{CreateCommentBody, CreatePostBody, CreatePostResponse};
use crate::config::FileContentBackendConfig;
use async_trait::async_trait;
use qna_application::{PublishingClient, PublishingError};
use qna_domain::{PostDraft, PublishedPost};
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Publishing client for the content backend.
///
/// Each call is a single attempt bounded by the configured timeout. Only
/// `200 OK` and `201 Created` count as success.
#[derive(Clone)]
pub struct HttpPublishingClient {
    client: Client,
    base_url: String,
    admin_password: String,
}

impl HttpPublishingClient {
    pub fn new(
        base_url: impl Into<String>,
        admin_password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PublishingError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PublishingError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_password: admin_password.into(),
        })
    }

    pub fn from_config(config: &FileContentBackendConfig) -> Result<Self, PublishingError> {
        Self::new(
            config.base_url.clone(),
            config.admin_password.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/posts/{post_id}/comments`, with `post_id` percent-encoded
    /// as a single path segment.
    fn comments_url(&self, post_id: &str) -> Result<Url, PublishingError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PublishingError::Transport(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| PublishingError::Transport("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(["posts", post_id, "comments"]);
        Ok(url)
    }

    fn check_status(response: &Response) -> Result<(), PublishingError> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(PublishingError::Status {
                status: status.as_u16(),
            }),
        }
    }
}

fn transport_error(err: reqwest::Error) -> PublishingError {
    if err.is_timeout() {
        PublishingError::Timeout
    } else {
        PublishingError::Transport(err.to_string())
    }
}

#[async_trait]
impl PublishingClient for HttpPublishingClient {
    async fn create_post(
        &self,
        draft: &PostDraft,
        content: &str,
    ) -> Result<PublishedPost, PublishingError> {
        let url = format!("{}/posts", self.base_url);
        debug!(url = %url, title = %draft.title, "Creating post");

        let response = self
            .client
            .post(&url)
            .json(&CreatePostBody::new(draft, content))
            .send()
            .await
            .map_err(transport_error)?;

        if let Err(e) = Self::check_status(&response) {
            warn!(url = %url, error = %e, "Post creation refused");
            return Err(e);
        }

        let body: CreatePostResponse = response
            .json()
            .await
            .map_err(|e| PublishingError::InvalidResponse(e.to_string()))?;

        Ok(body.into())
    }

    async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
        is_machine_generated: bool,
    ) -> Result<(), PublishingError> {
        let url = self.comments_url(post_id)?;
        debug!(url = %url, "Creating comment");

        let response = self
            .client
            .post(url)
            .json(&CreateCommentBody {
                content,
                admin_password: &self.admin_password,
                is_ai_generated: is_machine_generated,
            })
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_status(&response)
    }
}
