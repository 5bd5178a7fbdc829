use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Configuration for the persisted key-value store holding the bearer token
#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Path of the JSON file backing the store
    pub path: String,
    /// Key under which the token is stored
    pub token_key: String,
}
