use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::lookup::LookupConfig;
use self::sources::SourcesConfig;

pub mod log;
pub mod lookup;
pub mod sources;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sources: SourcesConfig,
    pub lookup: LookupConfig,
    pub log: LogConfig,

    /// Verbose logging and diagnostics
    pub debug_mode: bool,
    /// Request timeout applied by the HTTP transport
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let debug_mode = env::var("DEBUG").map(|v| !v.is_empty()).unwrap_or(false);

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            sources: SourcesConfig::new(),
            lookup: LookupConfig::new(),
            log: LogConfig::new(debug_mode),

            debug_mode,
            http_timeout_seconds,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
