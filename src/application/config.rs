use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_NEWS_URL, DEFAULT_STORAGE_PATH, DEFAULT_TIMEOUT_SECS, TOKEN_KEY,
};
use crate::error::AppError;
use crate::storage::config::StorageConfig;
use crate::storage::token_store::FileTokenStore;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the GrowGuru client
pub struct Config {
    /// GrowGuru REST API configuration
    pub api: RestApiConfig,
    /// News service configuration
    pub news: NewsApiConfig,
    /// Persisted token store configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every relative request path is joined to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the news service
pub struct NewsApiConfig {
    /// Full URL of the news endpoint
    pub url: String,
    /// Timeout in seconds for news requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file if one is present, then reads:
    ///
    /// * `GROWGURU_API_BASE_URL` (default `http://localhost:3000/api`)
    /// * `GROWGURU_API_TIMEOUT` (default 30 seconds)
    /// * `GROWGURU_NEWS_URL` (default `http://localhost:5000/noticias`)
    /// * `GROWGURU_NEWS_TIMEOUT` (default 30 seconds)
    /// * `GROWGURU_STORAGE_PATH` (default `.growguru/local_storage.json`)
    /// * `GROWGURU_TOKEN_KEY` (default `token`)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            api: RestApiConfig {
                base_url: get_env_or_default(
                    "GROWGURU_API_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
                timeout: get_env_or_default("GROWGURU_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            news: NewsApiConfig {
                url: get_env_or_default("GROWGURU_NEWS_URL", String::from(DEFAULT_NEWS_URL)),
                timeout: get_env_or_default("GROWGURU_NEWS_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                path: get_env_or_default(
                    "GROWGURU_STORAGE_PATH",
                    String::from(DEFAULT_STORAGE_PATH),
                ),
                token_key: get_env_or_default("GROWGURU_TOKEN_KEY", String::from(TOKEN_KEY)),
            },
        }
    }

    /// Configuration with the built-in defaults, ignoring the environment
    #[must_use]
    pub fn local() -> Self {
        Config {
            api: RestApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            news: NewsApiConfig {
                url: DEFAULT_NEWS_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            storage: StorageConfig {
                path: DEFAULT_STORAGE_PATH.to_string(),
                token_key: TOKEN_KEY.to_string(),
            },
        }
    }

    /// Opens the file-backed token store described by `storage`
    ///
    /// # Returns
    ///
    /// A Result containing either the opened store or an error
    pub fn open_token_store(&self) -> Result<FileTokenStore, AppError> {
        FileTokenStore::open(&self.storage.path)
    }
}
