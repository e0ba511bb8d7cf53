use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub splash: SplashConfig,
}

/// Recipe service endpoint and timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the recipe service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

/// Search coordinator tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet window after the last keystroke before a request is issued.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Queries shorter than this (in characters, after trimming) are never
    /// sent.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

impl SearchConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// How much the dashboard asks for on its aggregate load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    #[serde(default = "default_popular_limit")]
    pub popular_limit: u32,
    /// How many tags the categories row shows.
    #[serde(default = "default_tag_row_limit")]
    pub tag_row_limit: usize,
}

/// Login request parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Requested session lifetime, forwarded to the login endpoint.
    #[serde(default = "default_expires_in_mins")]
    pub expires_in_mins: u32,
}

/// Splash screen timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplashConfig {
    #[serde(default = "default_splash_ms")]
    pub duration_ms: u64,
}

impl SplashConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_len() -> usize {
    2
}

fn default_featured_limit() -> u32 {
    10
}

fn default_popular_limit() -> u32 {
    10
}

fn default_tag_row_limit() -> usize {
    12
}

fn default_expires_in_mins() -> u32 {
    30
}

fn default_splash_ms() -> u64 {
    2000
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

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            popular_limit: default_popular_limit(),
            tag_row_limit: default_tag_row_limit(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            expires_in_mins: default_expires_in_mins(),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_splash_ms(),
        }
    }
}
