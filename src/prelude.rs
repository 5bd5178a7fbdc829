/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # GrowGuru Client Prelude
//!
//! Imports the types most callers need in one line.
//!
//! ## Usage
//!
//! ```rust
//! use growguru_client::prelude::*;
//!
//! let config = Config::local();
//! let store = std::sync::Arc::new(MemoryTokenStore::with_entry("token", "abc"));
//! let client = HttpClient::new(&config, StoredCredentials::with_default_key(store));
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the GrowGuru client
pub use crate::application::config::{Config, NewsApiConfig, RestApiConfig};

/// Token store configuration
pub use crate::storage::config::StorageConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{AppError, NewsFetchError};

// ============================================================================
// CREDENTIALS AND STORAGE
// ============================================================================

/// Credential providers
pub use crate::session::credentials::{CredentialProvider, NoCredentials, StoredCredentials, Token};

/// Key-value token stores
pub use crate::storage::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Configured API client
pub use crate::application::client::HttpClient;

/// Request interceptors
pub use crate::application::interceptor::{AuthInterceptor, RequestInterceptor};

/// Outgoing request as seen by interceptors
pub use crate::model::http::OutgoingRequest;

// ============================================================================
// NEWS
// ============================================================================

/// News service trait
pub use crate::application::interfaces::news::NewsService;

/// News service client and the default-client helper
pub use crate::application::services::news_service::{
    NewsClient, fetch_news, set_default_news_client,
};

/// News models
pub use crate::model::requests::NewsRequest;
pub use crate::model::responses::NewsResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Constants
pub use crate::constants::*;
