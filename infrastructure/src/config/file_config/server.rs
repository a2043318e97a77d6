//! Runtime configuration from TOML (`[server]`, `[cache]`, `[logging]`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Expire cached answers after this many seconds (default: never)
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated operation logs (default: stderr only)
    pub directory: Option<PathBuf>,
    /// JSONL file receiving conversation events
    pub conversation_log: Option<PathBuf>,
}
