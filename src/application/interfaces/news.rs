use crate::error::NewsFetchError;
use crate::model::responses::NewsResponse;
use async_trait::async_trait;

/// Interface for the news service
#[async_trait]
pub trait NewsService: Send + Sync {
    /// Fetches news items for a ticker
    ///
    /// # Arguments
    /// * `ticker` - Instrument symbol (e.g. "PETR4"), sent as given
    ///
    /// # Returns
    /// * The news service payload, unvalidated
    async fn fetch_news(&self, ticker: &str) -> Result<NewsResponse, NewsFetchError>;
}
