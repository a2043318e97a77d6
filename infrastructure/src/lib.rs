//! Infrastructure layer for qna-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod content_backend;
pub mod logging;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use cache::InMemoryAnswerCache;
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileGenerationMode};
pub use content_backend::HttpPublishingClient;
pub use logging::JsonlConversationLogger;
pub use prompt::{PromptSource, SystemPromptLoader};
pub use providers::MockProvider;

#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockProvider;
