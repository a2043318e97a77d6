//! Provider configuration from TOML (`[bedrock]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region for Bedrock models (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials
    pub profile: Option<String>,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
        }
    }
}

impl FileBedrockConfig {
    /// Whether AWS credentials appear to be available.
    ///
    /// A configured profile counts, as do the standard AWS environment
    /// variables.
    pub fn credentials_configured(&self) -> bool {
        self.profile.is_some()
            || std::env::var_os("AWS_PROFILE").is_some()
            || std::env::var_os("AWS_ACCESS_KEY_ID").is_some()
    }
}
