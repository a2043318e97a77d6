//! System prompt loading.

mod loader;

pub use loader::{PromptSource, SystemPromptLoader};
