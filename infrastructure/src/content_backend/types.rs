//! Wire types for the content backend JSON API.

use qna_domain::{PostDraft, PublishedPost};
use serde::{Deserialize, Deserializer, Serialize};

/// Fallback confirmation when the backend omits one.
pub const DEFAULT_POST_MESSAGE: &str = "Post created";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub password: &'a str,
    pub is_anonymous: bool,
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> CreatePostBody<'a> {
    pub fn new(draft: &'a PostDraft, content: &'a str) -> Self {
        Self {
            title: &draft.title,
            content,
            password: &draft.password,
            is_anonymous: draft.is_anonymous,
            is_private: draft.is_private,
            author_name: draft.author_name.as_deref(),
            email: draft.email.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentBody<'a> {
    pub content: &'a str,
    pub admin_password: &'a str,
    pub is_ai_generated: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub post_id: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CreatePostResponse> for PublishedPost {
    fn from(response: CreatePostResponse) -> Self {
        PublishedPost {
            id: response.id,
            post_id: response.post_id,
            message: response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_POST_MESSAGE.to_string()),
        }
    }
}

/// Backends disagree on whether the internal id is a string or a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
