//! Axum HTTP surface for the conversation orchestrator.
//!
//! ```text
//! GET  /               health and generation mode
//! POST /llm/chat       single-shot flow
//! POST /llm/chat/ask   ask phase of the split flow
//! POST /llm/chat/post  post phase of the split flow
//! ```
//!
//! Failures map to `422` (bad input) or `502` (upstream unavailable) with a
//! JSON body `{error, message, aiAnswer?}`.

mod api;
mod dto;
mod error;

pub use dto::{AskRequest, AskResponse, ChatRequest, ChatResponse, ErrorBody, PostRequest};
pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};
use qna_application::ConversationOrchestrator;
use std::future::Future;
use std::io;
use tokio::net::TcpListener;
use tracing::info;

/// Router state injected into every handler.
///
/// Cheap to clone; the orchestrator shares its ports behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: ConversationOrchestrator,
}

impl AppState {
    pub fn new(orchestrator: ConversationOrchestrator) -> Self {
        Self { orchestrator }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/llm/chat", post(api::chat))
        .route("/llm/chat/ask", post(api::ask))
        .route("/llm/chat/post", post(api::post))
        .with_state(state)
}

/// Bind `bind_addr` and serve until `shutdown` resolves.
pub async fn serve<F>(bind_addr: &str, state: AppState, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(bind_addr).await?;
    info!(bind_addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use qna_application::{
        GenerateAnswerUseCase, PublishAnswerUseCase, PublishingClient, PublishingError,
    };
    use qna_domain::{GenerationSettings, PostDraft, PublishedPost, mock_answer};
    use qna_infrastructure::{InMemoryAnswerCache, MockProvider};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubBackend {
        fail_post: bool,
        posts: Mutex<Vec<String>>,
        comments: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PublishingClient for StubBackend {
        async fn create_post(
            &self,
            _draft: &PostDraft,
            content: &str,
        ) -> Result<PublishedPost, PublishingError> {
            if self.fail_post {
                return Err(PublishingError::Status { status: 500 });
            }
            let mut posts = self.posts.lock().unwrap();
            posts.push(content.to_string());
            Ok(PublishedPost {
                id: format!("uuid-{}", posts.len()),
                post_id: Some(posts.len() as u64),
                message: "Post created".to_string(),
            })
        }

        async fn create_comment(
            &self,
            _post_id: &str,
            content: &str,
            _is_machine_generated: bool,
        ) -> Result<(), PublishingError> {
            self.comments.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    fn router_with(backend: Arc<StubBackend>) -> Router {
        let mut settings = GenerationSettings::default();
        settings.simulation.delay = Duration::ZERO;
        let provider =
            MockProvider::new().rejecting(settings.simulation.invalid_model_id.clone());
        let generator = GenerateAnswerUseCase::new(Arc::new(provider), settings, "prompt");
        let orchestrator = ConversationOrchestrator::new(
            generator,
            PublishAnswerUseCase::new(backend),
            Arc::new(InMemoryAnswerCache::new()),
        );
        build_router(AppState::new(orchestrator))
    }

    fn router() -> Router {
        router_with(Arc::new(StubBackend::default()))
    }

    async fn call(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let request = match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn post_data() -> Value {
        json!({
            "title": "Log aggregation",
            "password": "pw",
            "isAnonymous": false,
            "isPrivate": false,
            "authorName": "Dana",
            "email": ""
        })
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let (status, body) = call(router(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "mock");
    }

    #[tokio::test]
    async fn test_chat_without_publishing() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat",
            Some(json!({
                "conversationId": "c-1",
                "originalQuestion": "What is log aggregation?",
                "wantsToPost": false
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let expected = mock_answer("What is log aggregation?");
        assert_eq!(body["reply"], expected.as_str());
        assert_eq!(body["aiAnswer"], expected.as_str());
        assert_eq!(body["commentCreated"], false);
        assert_eq!(body["nextStep"], "completed");
        assert_eq!(body["meta"]["fields"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_chat_with_publishing() {
        let backend = Arc::new(StubBackend::default());
        let (status, body) = call(
            router_with(backend.clone()),
            "POST",
            "/llm/chat",
            Some(json!({
                "conversationId": "c-1",
                "originalQuestion": "What is log aggregation?",
                "wantsToPost": true,
                "postData": post_data()
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["postCreated"]["postId"], 1);
        assert_eq!(body["commentCreated"], true);
        assert!(body["reply"].as_str().unwrap().contains("Post number: 1"));
        assert_eq!(
            backend.posts.lock().unwrap().as_slice(),
            ["What is log aggregation?"]
        );
    }

    #[tokio::test]
    async fn test_chat_publish_intent_without_post_data_is_422() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat",
            Some(json!({
                "conversationId": "c-1",
                "originalQuestion": "q",
                "wantsToPost": true
            })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
    }

    #[tokio::test]
    async fn test_blank_question_is_422() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat/ask",
            Some(json!({"conversationId": "c-1", "question": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
    }

    #[tokio::test]
    async fn test_malformed_body_is_422() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat",
            Some(json!({"conversationId": "c-1"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
    }

    #[tokio::test]
    async fn test_chat_without_publish_intent_field_is_422() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat",
            Some(json!({"conversationId": "c-1", "originalQuestion": "q"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
    }

    #[tokio::test]
    async fn test_simulated_error_is_502() {
        let (status, body) = call(
            router(),
            "POST",
            "/llm/chat",
            Some(json!({
                "conversationId": "c-1",
                "originalQuestion": "q",
                "wantsToPost": false,
                "simulateError": true
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "upstream_unavailable");
        assert!(body.get("aiAnswer").is_none());
    }

    #[tokio::test]
    async fn test_split_flow_publishes_cached_answer() {
        let backend = Arc::new(StubBackend::default());
        let router = router_with(backend.clone());

        let (status, asked) = call(
            router.clone(),
            "POST",
            "/llm/chat/ask",
            Some(json!({"conversationId": "c-9", "question": "What is log aggregation?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(asked["conversationId"], "c-9");

        let (status, posted) = call(
            router,
            "POST",
            "/llm/chat/post",
            Some(json!({
                "conversationId": "c-9",
                "originalQuestion": "What is log aggregation?",
                "postData": post_data()
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(posted["aiAnswer"], asked["answer"]);
        assert_eq!(
            backend.comments.lock().unwrap().as_slice(),
            [asked["answer"].as_str().unwrap()]
        );
    }

    #[tokio::test]
    async fn test_post_failure_is_502_with_answer() {
        let backend = Arc::new(StubBackend {
            fail_post: true,
            ..StubBackend::default()
        });
        let (status, body) = call(
            router_with(backend),
            "POST",
            "/llm/chat",
            Some(json!({
                "conversationId": "c-1",
                "originalQuestion": "What is log aggregation?",
                "wantsToPost": true,
                "postData": post_data()
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "upstream_unavailable");
        assert_eq!(
            body["aiAnswer"],
            mock_answer("What is log aggregation?").as_str()
        );
    }
}
