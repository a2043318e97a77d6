//! Hand-written port doubles shared by the use case tests.

use crate::ports::answer_cache::AnswerCache;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::publishing::{PublishingClient, PublishingError};
use crate::ports::text_generation::{GenerationRequest, ProviderError, TextGenerationProvider};
use async_trait::async_trait;
use qna_domain::{ConversationId, PostDraft, PublishedPost};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

// ==================== Provider ====================

/// Provider that replays scripted replies and records every request.
///
/// Once the script is exhausted it answers `"answer #n"`. Requests for
/// `rejected_model` always fail, like a real provider given a bad model id.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    rejected_model: Option<String>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            rejected_model: None,
        }
    }

    pub fn with_replies(replies: Vec<Result<String, ProviderError>>) -> Self {
        let provider = Self::new();
        *provider.replies.lock().unwrap() = replies.into();
        provider
    }

    pub fn rejecting_model(mut self, model_id: &str) -> Self {
        self.rejected_model = Some(model_id.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        if self.rejected_model.as_deref() == Some(request.model_id.as_str()) {
            return Err(ProviderError::rejected("ValidationException", "invalid model id"));
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(format!("answer #{}", n)))
    }
}

// ==================== Cache ====================

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<ConversationId, String>>,
}

impl MemoryCache {
    pub fn contains(&self, id: &str) -> bool {
        let id = ConversationId::new(id).unwrap();
        self.entries.lock().unwrap().contains_key(&id)
    }
}

impl AnswerCache for MemoryCache {
    fn put(&self, id: &ConversationId, answer: String) {
        self.entries.lock().unwrap().insert(id.clone(), answer);
    }

    fn get(&self, id: &ConversationId) -> Option<String> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    fn delete(&self, id: &ConversationId) {
        self.entries.lock().unwrap().remove(id);
    }

    fn delete_if(&self, id: &ConversationId, expected: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        if entries.get(id).is_some_and(|answer| answer == expected) {
            entries.remove(id);
            true
        } else {
            false
        }
    }
}

// ==================== Publisher ====================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedComment {
    pub post_id: String,
    pub content: String,
    pub is_machine_generated: bool,
}

/// Content backend double with switchable failures.
pub struct FakePublisher {
    fail_post: bool,
    fail_comment: bool,
    posts: Mutex<Vec<(PostDraft, String)>>,
    comments: Mutex<Vec<RecordedComment>>,
}

impl FakePublisher {
    pub fn new() -> Self {
        Self {
            fail_post: false,
            fail_comment: false,
            posts: Mutex::new(Vec::new()),
            comments: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_post() -> Self {
        Self {
            fail_post: true,
            ..Self::new()
        }
    }

    pub fn failing_comment() -> Self {
        Self {
            fail_comment: true,
            ..Self::new()
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn posted_content(&self) -> Vec<String> {
        self.posts.lock().unwrap().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn comments(&self) -> Vec<RecordedComment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishingClient for FakePublisher {
    async fn create_post(
        &self,
        draft: &PostDraft,
        content: &str,
    ) -> Result<PublishedPost, PublishingError> {
        if self.fail_post {
            return Err(PublishingError::Status { status: 500 });
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push((draft.clone(), content.to_string()));
        Ok(PublishedPost {
            id: format!("post-uuid-{}", posts.len()),
            post_id: Some(posts.len() as u64),
            message: "Post created".to_string(),
        })
    }

    async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
        is_machine_generated: bool,
    ) -> Result<(), PublishingError> {
        if self.fail_comment {
            return Err(PublishingError::Transport("connection reset".to_string()));
        }
        self.comments.lock().unwrap().push(RecordedComment {
            post_id: post_id.to_string(),
            content: content.to_string(),
            is_machine_generated,
        });
        Ok(())
    }
}

// ==================== Logger ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<ConversationEvent>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
    }

    pub fn events_of(&self, event_type: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .map(|e| e.payload.clone())
            .collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn draft() -> PostDraft {
    PostDraft {
        title: "What is log aggregation?".to_string(),
        password: "pw".to_string(),
        is_anonymous: false,
        is_private: false,
        author_name: Some("Dana".to_string()),
        email: None,
    }
}
