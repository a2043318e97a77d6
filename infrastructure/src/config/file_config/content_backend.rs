//! Content backend configuration from TOML (`[content_backend]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentBackendConfig {
    /// Base URL of the content backend
    pub base_url: String,
    /// Service credential for machine-generated comments
    pub admin_password: String,
    /// Upper bound for one backend call, in seconds
    pub timeout_seconds: u64,
}

impl Default for FileContentBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            admin_password: String::new(),
            timeout_seconds: 5,
        }
    }
}
