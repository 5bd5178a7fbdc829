/// Module containing token storage configuration
pub mod config;
/// Persistent key-value store for credentials
pub mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
