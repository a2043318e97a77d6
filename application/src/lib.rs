//! Application layer for qna-relay
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_cache::AnswerCache,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    publishing::{PublishingClient, PublishingError},
    text_generation::{GenerationRequest, ProviderError, TextGenerationProvider},
};
pub use use_cases::generate_answer::{GenerateAnswerUseCase, GenerationError};
pub use use_cases::orchestrator::{
    ChatInput, ConversationOrchestrator, ErrorCategory, OrchestratorError, PostInput,
};
pub use use_cases::publish_answer::PublishAnswerUseCase;
