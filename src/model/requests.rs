use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of a news lookup: `{"ticker": "PETR4"}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsRequest {
    /// Instrument symbol, sent exactly as given
    pub ticker: String,
}

impl NewsRequest {
    /// Creates a request for `ticker`
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
        }
    }
}
