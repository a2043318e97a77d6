//! Axum handlers for the chat routes.

use super::AppState;
use super::dto::{
    AskRequest, AskResponse, ChatRequest, ChatResponse, HealthResponse, PostRequest,
};
use super::error::ApiError;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use qna_application::{ChatInput, PostInput};
use qna_domain::{ConversationId, ConversationTurn, Question};

/// GET /
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "qna-relay is running",
        mode: state.orchestrator.generator().mode().to_string(),
    })
}

/// POST /llm/chat
pub(super) async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body?;
    let turn = ConversationTurn::parse(req.conversation_id, req.original_question)?
        .with_simulated_error(req.simulate_error);
    let input = ChatInput::new(turn).with_publish_intent(req.wants_to_post, req.post_data);

    let result = state.orchestrator.chat(input).await?;
    Ok(Json(result.into()))
}

/// POST /llm/chat/ask
pub(super) async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(req) = body?;
    let turn = ConversationTurn::parse(req.conversation_id, req.question)?
        .with_simulated_error(req.simulate_error);
    let conversation_id = turn.id.to_string();

    let answer = state.orchestrator.ask(turn).await?;
    Ok(Json(AskResponse {
        conversation_id,
        answer,
    }))
}

/// POST /llm/chat/post
pub(super) async fn post(
    State(state): State<AppState>,
    body: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body?;
    let input = PostInput::new(
        ConversationId::new(req.conversation_id)?,
        Question::new(req.original_question)?,
        req.post_data,
    );

    let result = state.orchestrator.post(input).await?;
    Ok(Json(result.into()))
}
