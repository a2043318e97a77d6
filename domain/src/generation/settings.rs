//! Generation settings (provider-neutral, serde-free).
//!
//! These types define the shape of generation settings without depending
//! on any serialization format. The infrastructure config layer builds them
//! from the TOML file.

use super::retry::RetryPolicy;
use std::time::Duration;

/// How the answer generator is backed, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Canned, deterministic answers. Used when no provider credentials exist.
    #[default]
    Mock,
    /// Real calls to the text-generation provider.
    Live,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Mock => write!(f, "mock"),
            GenerationMode::Live => write!(f, "live"),
        }
    }
}

/// Parameters of the failure-simulation path.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    /// Provider calls made before giving up.
    pub attempts: u32,
    /// Pause between two simulated attempts.
    pub delay: Duration,
    /// A model identifier the provider is known to reject.
    pub invalid_model_id: String,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(1),
            invalid_model_id: "anthropic.claude-invalid-model-v0:0".to_string(),
        }
    }
}

impl SimulationSettings {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::simulated_failure(self.attempts, self.delay)
    }
}

/// Everything the answer generator needs besides the system prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub mode: GenerationMode,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound for a single provider call.
    pub timeout: Duration,
    /// Policy for genuine (non-simulated) calls.
    pub retry: RetryPolicy,
    pub simulation: SimulationSettings,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Mock,
            model_id: "anthropic.claude-3-sonnet-20240229-v1:0".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
            timeout: Duration::from_secs(60),
            retry: RetryPolicy::single(),
            simulation: SimulationSettings::default(),
        }
    }
}
