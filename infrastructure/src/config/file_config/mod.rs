//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain settings once
//! validated.

mod content_backend;
mod generation;
mod providers;
mod server;

pub use content_backend::FileContentBackendConfig;
pub use generation::{FileGenerationConfig, FileGenerationMode, FileSimulationConfig};
pub use providers::FileBedrockConfig;
pub use server::{FileCacheConfig, FileLoggingConfig, FileServerConfig};

use qna_domain::{GenerationMode, GenerationSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("temperature must be between 0 and 1, got {0}")]
    InvalidTemperature(f32),

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Answer generation settings
    pub generation: FileGenerationConfig,
    /// AWS Bedrock settings (live mode)
    pub bedrock: FileBedrockConfig,
    /// Downstream content backend
    pub content_backend: FileContentBackendConfig,
    /// Conversation answer cache
    pub cache: FileCacheConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let generation = &self.generation;
        if generation.timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue("generation.timeout_seconds"));
        }
        if generation.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroValue("generation.max_tokens"));
        }
        if generation.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroValue("generation.max_attempts"));
        }
        if !(0.0..=1.0).contains(&generation.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(generation.temperature));
        }
        if generation.model_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyValue("generation.model_id"));
        }
        if generation.simulation.attempts == 0 {
            return Err(ConfigValidationError::ZeroValue("generation.simulation.attempts"));
        }
        if generation.simulation.invalid_model_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyValue(
                "generation.simulation.invalid_model_id",
            ));
        }
        if self.content_backend.timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroValue("content_backend.timeout_seconds"));
        }
        if self.content_backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyValue("content_backend.base_url"));
        }
        if self.cache.ttl_seconds == Some(0) {
            return Err(ConfigValidationError::ZeroValue("cache.ttl_seconds"));
        }
        Ok(())
    }

    /// Generation mode after resolving `auto` against available credentials.
    pub fn generation_mode(&self) -> GenerationMode {
        self.generation
            .mode
            .resolve(self.bedrock.credentials_configured())
    }

    /// Build the domain generation settings.
    pub fn generation_settings(&self) -> GenerationSettings {
        self.generation.to_settings(self.generation_mode())
    }
}
