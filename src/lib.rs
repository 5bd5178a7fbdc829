/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # GrowGuru Client
//!
//! HTTP plumbing for the GrowGuru front-end:
//!
//! - [`application::client::HttpClient`]: a client bound to the GrowGuru API base
//!   address that attaches `Authorization: Bearer <token>` to every request,
//!   reading the token through an injected [`session::credentials::CredentialProvider`].
//! - [`application::services::news_service::NewsClient`] and [`fetch_news`]: a single
//!   POST of a ticker symbol to the news service.
//!
//! ## Example
//!
//! ```ignore
//! use growguru_client::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Config::new();
//! let store = Arc::new(FileTokenStore::open(&config.storage.path)?);
//! let credentials = StoredCredentials::new(store, &config.storage.token_key);
//! let api = HttpClient::new(&config, credentials)?;
//!
//! let portfolio: serde_json::Value = api.get("/portfolio").await?;
//! let news = fetch_news("PETR4").await?;
//! ```

/// Application layer: configuration, clients, interceptors and services
pub mod application;
/// Crate-wide constants and defaults
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and the shared HTTP dispatch helper
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Credential providers
pub mod session;
/// Persistent key-value token storage
pub mod storage;
/// Logging and environment helpers
pub mod utils;

pub use application::services::news_service::fetch_news;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
