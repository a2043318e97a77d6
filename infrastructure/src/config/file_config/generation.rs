//! Generation configuration from TOML (`[generation]` section)

use qna_domain::{GenerationMode, GenerationSettings, RetryPolicy, SimulationSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Requested generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileGenerationMode {
    /// Live when provider credentials are configured, mock otherwise.
    #[default]
    Auto,
    Mock,
    Live,
}

impl FileGenerationMode {
    pub fn resolve(self, credentials_configured: bool) -> GenerationMode {
        match self {
            FileGenerationMode::Mock => GenerationMode::Mock,
            FileGenerationMode::Live => GenerationMode::Live,
            FileGenerationMode::Auto if credentials_configured => GenerationMode::Live,
            FileGenerationMode::Auto => GenerationMode::Mock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Provider calls made on the simulated failure path
    pub attempts: u32,
    /// Pause between simulated attempts in milliseconds
    pub delay_ms: u64,
    /// Model id the provider is known to reject
    pub invalid_model_id: String,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        let defaults = SimulationSettings::default();
        Self {
            attempts: defaults.attempts,
            delay_ms: defaults.delay.as_millis() as u64,
            invalid_model_id: defaults.invalid_model_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub mode: FileGenerationMode,
    /// Provider model identifier
    pub model_id: String,
    /// Max tokens per answer (default: 2048)
    pub max_tokens: u32,
    /// Sampling temperature (default: 0.7)
    pub temperature: f32,
    /// Upper bound for one provider call, in seconds
    pub timeout_seconds: u64,
    /// File holding the system prompt; read once at startup
    pub system_prompt_path: PathBuf,
    /// Attempts for genuine (non-simulated) calls
    pub max_attempts: u32,
    /// Pause between genuine retries in milliseconds
    pub retry_delay_ms: u64,
    pub simulation: FileSimulationConfig,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let defaults = GenerationSettings::default();
        Self {
            mode: FileGenerationMode::Auto,
            model_id: defaults.model_id,
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            timeout_seconds: defaults.timeout.as_secs(),
            system_prompt_path: PathBuf::from("system_prompt.txt"),
            max_attempts: 1,
            retry_delay_ms: 1000,
            simulation: FileSimulationConfig::default(),
        }
    }
}

impl FileGenerationConfig {
    pub fn to_settings(&self, mode: GenerationMode) -> GenerationSettings {
        GenerationSettings {
            mode,
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_seconds),
            retry: RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms)),
            simulation: SimulationSettings {
                attempts: self.simulation.attempts,
                delay: Duration::from_millis(self.simulation.delay_ms),
                invalid_model_id: self.simulation.invalid_model_id.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_mode_resolution() {
        assert_eq!(FileGenerationMode::Auto.resolve(true), GenerationMode::Live);
        assert_eq!(FileGenerationMode::Auto.resolve(false), GenerationMode::Mock);
        assert_eq!(FileGenerationMode::Mock.resolve(true), GenerationMode::Mock);
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let config: FileGenerationConfig = toml::from_str("mode = \"live\"").unwrap();
        assert_eq!(config.mode, FileGenerationMode::Live);
    }
}
