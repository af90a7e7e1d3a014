use std::env;

use serde::{Deserialize, Serialize};

fn default_copied_flag_ttl_ms() -> u64 {
    1000
}

fn default_paste_poll_interval_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// How long the "copied" confirmation stays visible
    #[serde(default = "default_copied_flag_ttl_ms")]
    pub copied_flag_ttl_ms: u64,
    /// Clipboard paste watcher poll interval
    #[serde(default = "default_paste_poll_interval_ms")]
    pub paste_poll_interval_ms: u64,
}

impl SessionConfig {
    pub fn new() -> Self {
        let copied_flag_ttl_ms = env::var("COPIED_FLAG_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_copied_flag_ttl_ms);

        let paste_poll_interval_ms = env::var("PASTE_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_paste_poll_interval_ms);

        Self {
            copied_flag_ttl_ms,
            paste_poll_interval_ms,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            copied_flag_ttl_ms: default_copied_flag_ttl_ms(),
            paste_poll_interval_ms: default_paste_poll_interval_ms(),
        }
    }
}
