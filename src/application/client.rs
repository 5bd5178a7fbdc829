/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Configured client for the GrowGuru API
//!
//! Binds the API base address once and runs the registered interceptors on
//! every request. The default interceptor attaches the bearer token.
//!
//! # Example
//! ```ignore
//! use growguru_client::prelude::*;
//!
//! let config = Config::new();
//! let client = HttpClient::from_config(&config)?;
//!
//! let me: serde_json::Value = client.get("/users/me").await?;
//! ```

use crate::application::config::Config;
use crate::application::interceptor::{AuthInterceptor, RequestInterceptor};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{OutgoingRequest, build_url, parse_json, send_request};
use crate::session::credentials::{CredentialProvider, StoredCredentials};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Client bound to the GrowGuru API base address with bearer token injection
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpClient {
    /// Creates a client that reads its bearer token from `credentials`
    ///
    /// # Arguments
    /// * `config` - Supplies the base URL and timeout
    /// * `credentials` - Queried on every request
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(
        config: &Config,
        credentials: impl CredentialProvider + 'static,
    ) -> Result<Self, AppError> {
        Ok(Self::without_interceptors(config)?.with_interceptor(AuthInterceptor::new(credentials)))
    }

    /// Creates a client reading the token from the file store named in `config.storage`
    ///
    /// The file may not exist yet; a token saved to it later is picked up on
    /// the next request.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let store = Arc::new(config.open_token_store()?);
        let credentials = StoredCredentials::new(store, &config.storage.token_key);
        Self::new(config, credentials)
    }

    /// Creates a client with no interceptors at all
    pub fn without_interceptors(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.api.timeout))
            .build()?;

        info!("HTTP client bound to {}", config.api.base_url);

        Ok(Self {
            http_client,
            base_url: config.api.base_url.clone(),
            interceptors: Vec::new(),
        })
    }

    /// Registers an interceptor; interceptors run in registration order
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Base address every relative path is joined to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Makes a request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute `http(s)://` URL
    /// * `body` - Optional body, serialized as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails or the body does not decode
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.request_raw(method.clone(), path, body).await?;
        parse_json(response).await.inspect_err(|e| {
            error!("Failed to decode response of {} {}: {}", method, path, e);
        })
    }

    /// Makes a request and returns the raw response for any 2xx status
    pub async fn request_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let mut request = OutgoingRequest::new(method, build_url(&self.base_url, path));
        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request);
        }

        let method = request.method.clone();
        let url = request.url.clone();
        send_request(&self.http_client, request, body)
            .await
            .inspect_err(|e| error!("{} {} failed: {}", method, url, e))
    }
}
