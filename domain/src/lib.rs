//! Domain layer for qna-relay
//!
//! This crate contains the entities and value objects of the question/answer
//! relay. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A [`ConversationTurn`] is one user question, correlated across the
//! ask/post split by a caller-supplied [`ConversationId`].
//!
//! ## Publishing
//!
//! A [`PostDraft`] describes the post to create on the content backend.
//! The backend answers with a [`PublishedPost`]; the generated answer is then
//! attached as a machine-generated comment, reported as a [`CommentOutcome`].
//!
//! ## Orchestration
//!
//! [`OrchestrationPhase`] names the steps a turn moves through and
//! [`OrchestrationResult`] is what the caller receives at the end.

pub mod conversation;
pub mod core;
pub mod generation;
pub mod orchestration;
pub mod publishing;
pub mod util;

// Re-export commonly used types
pub use conversation::{ConversationId, ConversationTurn};
pub use core::{error::DomainError, question::Question};
pub use generation::{
    prompt::{DEFAULT_SYSTEM_PROMPT, mock_answer},
    retry::{Acceptance, RetryPolicy},
    settings::{GenerationMode, GenerationSettings, SimulationSettings},
};
pub use orchestration::{
    field_meta::{FieldDescriptor, FieldMeta, FieldRule},
    phase::OrchestrationPhase,
    result::{NextStep, OrchestrationResult},
};
pub use publishing::{
    draft::PostDraft,
    entities::{CommentOutcome, PublishedPost},
};
