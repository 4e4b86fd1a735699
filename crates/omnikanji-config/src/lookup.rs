use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_task_timeout_ms() -> u64 {
    10_000
}

fn default_refresh_hours() -> u64 {
    24 * 30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Deadline for every fetch task started by a lookup, 0 disables it
    #[serde(default = "default_task_timeout_ms")]
    pub task_timeout_ms: u64,
    /// How often the KanjiDamage link index is rebuilt, 0 disables refresh
    #[serde(default = "default_refresh_hours")]
    pub link_index_refresh_hours: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let task_timeout_ms = env::var("TASK_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_task_timeout_ms);

        let link_index_refresh_hours = env::var("LINK_INDEX_REFRESH_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_refresh_hours);

        Self {
            task_timeout_ms,
            link_index_refresh_hours,
        }
    }

    pub fn task_timeout(&self) -> Option<Duration> {
        (self.task_timeout_ms > 0).then(|| Duration::from_millis(self.task_timeout_ms))
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.link_index_refresh_hours > 0)
            .then(|| Duration::from_secs(self.link_index_refresh_hours * 60 * 60))
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            task_timeout_ms: default_task_timeout_ms(),
            link_index_refresh_hours: default_refresh_hours(),
        }
    }
}
