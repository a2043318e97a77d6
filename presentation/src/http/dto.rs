//! Request and response bodies of the HTTP API (camelCase JSON).

use qna_domain::{FieldMeta, NextStep, OrchestrationResult, PostDraft, PublishedPost};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub conversation_id: String,
    pub original_question: String,
    pub wants_to_post: bool,
    #[serde(default)]
    pub post_data: Option<PostDraft>,
    #[serde(default)]
    pub simulate_error: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub conversation_id: String,
    pub question: String,
    #[serde(default)]
    pub simulate_error: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub conversation_id: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub conversation_id: String,
    pub original_question: String,
    pub post_data: PostDraft,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub ai_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_created: Option<PublishedPost>,
    pub comment_created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_error: Option<String>,
    pub next_step: NextStep,
    pub meta: FieldMeta,
}

impl From<OrchestrationResult> for ChatResponse {
    fn from(result: OrchestrationResult) -> Self {
        Self {
            reply: result.reply,
            ai_answer: result.answer,
            post_created: result.published_post,
            comment_created: result.comment.created,
            comment_error: result.comment.failure_reason,
            next_step: result.next_step,
            meta: result.meta,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub mode: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_answer: Option<String>,
}
