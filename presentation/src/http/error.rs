//! Mapping of orchestrator failures onto HTTP responses.

use super::dto::ErrorBody;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qna_application::{ErrorCategory, OrchestratorError};
use qna_domain::DomainError;
use tracing::warn;

/// An error leaving an HTTP handler.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    MalformedBody(JsonRejection),
    Orchestrator(OrchestratorError),
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        ApiError::Orchestrator(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Orchestrator(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MalformedBody(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "validation",
                    message: rejection.body_text(),
                    ai_answer: None,
                },
            ),
            ApiError::Orchestrator(err) => match err.category() {
                ErrorCategory::BadInput => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorBody {
                        error: "validation",
                        message: err.user_message(),
                        ai_answer: None,
                    },
                ),
                ErrorCategory::UpstreamUnavailable => {
                    warn!(error = %err, "Upstream failure");
                    (
                        StatusCode::BAD_GATEWAY,
                        ErrorBody {
                            error: "upstream_unavailable",
                            message: err.user_message(),
                            ai_answer: err.generated_answer().map(str::to_string),
                        },
                    )
                }
            },
        };

        (status, Json(body)).into_response()
    }
}
