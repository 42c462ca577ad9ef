use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Settings for the news search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API; `/search` is appended (e.g., "https://gnews.io/api/v4").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `lang` request parameter.
    #[serde(default = "default_language")]
    pub language: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is absent or empty.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Query sent when the caller has no query of its own.
    #[serde(default = "default_fallback_query")]
    pub fallback_query: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Where filtering and pagination happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedMode {
    /// Fetch one batch, filter and paginate it in memory.
    Client,
    /// Re-fetch whenever the committed query or page changes.
    #[default]
    Server,
}

/// Feed behaviour: mode, page sizes and debounce delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub mode: FeedMode,
    /// Articles requested per page in server mode (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Articles requested for the single batch in client mode (default: 400).
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    /// Articles shown per page in client mode (default: 3).
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    /// Search debounce delay in milliseconds (default: 600).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    "https://gnews.io/api/v4".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_api_key_env() -> String {
    "GNEWS_API_KEY".to_string()
}

fn default_fallback_query() -> String {
    "Google".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_page_size() -> u32 {
    10
}

fn default_batch_size() -> u32 {
    400
}

fn default_items_per_page() -> u32 {
    3
}

fn default_debounce_ms() -> u64 {
    600
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            api_key: None,
            api_key_env: default_api_key_env(),
            fallback_query: default_fallback_query(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            mode: FeedMode::default(),
            page_size: default_page_size(),
            batch_size: default_batch_size(),
            items_per_page: default_items_per_page(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
