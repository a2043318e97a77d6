//! Configuration file loading for qna-relay
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `QNA_` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./qna-relay.toml` or `./.qna-relay.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/qna-relay/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBedrockConfig, FileCacheConfig, FileConfig,
    FileContentBackendConfig, FileGenerationConfig, FileGenerationMode, FileLoggingConfig,
    FileServerConfig, FileSimulationConfig,
};
pub use loader::ConfigLoader;
