/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::news::NewsService;
use crate::constants::USER_AGENT;
use crate::error::{AppError, NewsFetchError};
use crate::model::http::{OutgoingRequest, parse_json, send_request};
use crate::model::requests::NewsRequest;
use crate::model::responses::NewsResponse;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

static DEFAULT_NEWS_CLIENT: OnceCell<NewsClient> = OnceCell::new();

/// Client for the news service
///
/// Posts straight to the configured news URL with its own bare HTTP client.
/// It does not go through [`HttpClient`](crate::application::client::HttpClient)
/// and never sends an `Authorization` header.
#[derive(Clone, Debug)]
pub struct NewsClient {
    http_client: Client,
    url: String,
}

impl NewsClient {
    /// Creates a client for the news endpoint in `config.news`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.news.timeout))
            .build()?;

        info!("News client bound to {}", config.news.url);

        Ok(Self {
            http_client,
            url: config.news.url.clone(),
        })
    }

    /// News endpoint URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches news for `ticker` and decodes the payload into `T`
    ///
    /// Failures are logged once and returned as [`NewsFetchError`].
    pub async fn fetch_news_as<T: DeserializeOwned>(
        &self,
        ticker: &str,
    ) -> Result<T, NewsFetchError> {
        let payload = self.fetch_news(ticker).await?;
        serde_json::from_value(payload).map_err(|e| {
            let e = AppError::from(e);
            error!("Error decoding news for {}: {}", ticker, e);
            NewsFetchError::new(ticker, e)
        })
    }

    async fn post_ticker(&self, ticker: &str) -> Result<NewsResponse, AppError> {
        let request = OutgoingRequest::new(Method::POST, self.url.as_str());
        let body = NewsRequest::new(ticker);
        let response = send_request(&self.http_client, request, Some(&body)).await?;
        parse_json(response).await
    }
}

#[async_trait]
impl NewsService for NewsClient {
    async fn fetch_news(&self, ticker: &str) -> Result<NewsResponse, NewsFetchError> {
        debug!("Fetching news for {}", ticker);
        self.post_ticker(ticker).await.map_err(|e| {
            error!("Error fetching news for {}: {}", ticker, e);
            NewsFetchError::new(ticker, e)
        })
    }
}

/// Installs `client` as the process-wide client used by [`fetch_news`]
///
/// Must be called before the first `fetch_news`; afterwards the default client
/// is fixed and `client` is handed back in `Err`.
pub fn set_default_news_client(client: NewsClient) -> Result<(), NewsClient> {
    let url = client.url.clone();
    DEFAULT_NEWS_CLIENT.set(client)?;
    info!("Default news client set to {}", url);
    Ok(())
}

/// Fetches news for `ticker` using the process-wide client
///
/// Unless one was installed with [`set_default_news_client`], the client is
/// built from [`Config::new`] on first use, so `GROWGURU_NEWS_URL` must be
/// set before the first call to take effect.
///
/// # Example
/// ```ignore
/// let news = growguru_client::fetch_news("PETR4").await?;
/// ```
pub async fn fetch_news(ticker: &str) -> Result<NewsResponse, NewsFetchError> {
    let client = DEFAULT_NEWS_CLIENT
        .get_or_try_init(|| NewsClient::new(&Config::new()))
        .map_err(|e| {
            error!("Error fetching news for {}: {}", ticker, e);
            NewsFetchError::new(ticker, e)
        })?;
    client.fetch_news(ticker).await
}
