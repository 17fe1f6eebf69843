use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote movie database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the movie search endpoint.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Prefix prepended to `poster_path` values.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Bearer token from the config file. The environment variable wins when both are set.
    #[serde(default)]
    pub token: Option<String>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. 0 disables it.
    #[serde(default)]
    pub timeout_seconds: u32,
}

/// Query cache tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Age after which a cached page is revalidated in the background
    /// when it is observed again. 0 means always.
    #[serde(default)]
    pub stale_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How long a toast stays on screen.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

fn default_search_url() -> String {
    "https://api.themoviedb.org/3/search/movie".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_token_env() -> String {
    "TMDB_TOKEN".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            image_base_url: default_image_base_url(),
            token_env: default_token_env(),
            token: None,
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            toast_seconds: default_toast_seconds(),
        }
    }
}
