use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g., "https://jsonplaceholder.typicode.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// How a section treats a response that belongs to an older request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Apply a response only if it answers the most recently issued query.
    #[default]
    Discard,
    /// Apply every response in arrival order; the last one to arrive wins.
    LastArrival,
}

/// Browser behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub stale_policy: StalePolicy,
    /// Clear the album selection and photos when a different user is selected.
    #[serde(default)]
    pub reset_selection_on_user_change: bool,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file. The terminal belongs to the UI, so logs are dropped if unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            stale_policy: StalePolicy::default(),
            reset_selection_on_user_change: false,
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}
