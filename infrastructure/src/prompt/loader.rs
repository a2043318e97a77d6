//! File system loader for the generator's system prompt
//!
//! The prompt is read once at startup. A missing, unreadable or blank file
//! falls back to [`DEFAULT_SYSTEM_PROMPT`] with a warning, so the service
//! can always start.
//!
//! # Example
//!
//! ```
//! use qna_infrastructure::SystemPromptLoader;
//!
//! let (prompt, _source) = SystemPromptLoader::load("does-not-exist.txt");
//! assert!(!prompt.is_empty());
//! ```

use qna_domain::DEFAULT_SYSTEM_PROMPT;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the active system prompt came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    File(PathBuf),
    BuiltIn,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPromptLoader;

impl SystemPromptLoader {
    /// Read the prompt at `path`, trimming surrounding whitespace.
    pub fn load(path: impl AsRef<Path>) -> (String, PromptSource) {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) if !content.trim().is_empty() => {
                debug!(path = %path.display(), bytes = content.len(), "Loaded system prompt");
                (
                    content.trim().to_string(),
                    PromptSource::File(path.to_path_buf()),
                )
            }
            Ok(_) => {
                warn!(path = %path.display(), "System prompt file is empty, using built-in prompt");
                (DEFAULT_SYSTEM_PROMPT.to_string(), PromptSource::BuiltIn)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    "Could not read system prompt ({}), using built-in prompt",
                    e
                );
                (DEFAULT_SYSTEM_PROMPT.to_string(), PromptSource::BuiltIn)
            }
        }
    }
}
