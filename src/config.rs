use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by every front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of the game API, without a trailing slash
    pub api_root: String,
    /// Delay between snapshot polls, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: "/api".to_owned(),
            poll_interval_ms: 1000,
        }
    }
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
