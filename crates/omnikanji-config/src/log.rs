use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Fallback filter when RUST_LOG is not set
    pub default_filter: String,
}

impl LogConfig {
    pub fn new(debug_mode: bool) -> Self {
        let format = match env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let default_filter = if debug_mode { "debug" } else { "info" }.to_string();

        Self {
            format,
            default_filter,
        }
    }
}
