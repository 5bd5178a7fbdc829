/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request as seen by interceptors, before it is handed to `reqwest`
///
/// The body is not part of it: bodies are serialized at dispatch time.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Headers sent with the request
    pub headers: HeaderMap,
}

impl OutgoingRequest {
    /// Creates a request with no headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// Joins `path` to `base_url`
///
/// Paths with an `http://` or `https://` scheme are treated as absolute and
/// returned unchanged; other paths, including ones like `httpbin/status`, are joined.
/// Otherwise exactly one `/` separates base and path.
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Sends a request and maps non-success statuses to [`AppError`]
///
/// Makes exactly one attempt. Failures are logged at debug level only; the
/// caller decides how loudly to report them.
///
/// # Arguments
/// * `client` - The reqwest client to send with
/// * `request` - Method, URL and headers (after interceptors ran)
/// * `body` - Optional body, serialized as JSON
///
/// # Returns
/// * `Ok(Response)` - for any 2xx status
/// * `Err(AppError::Unauthorized)` - for 401
/// * `Err(AppError::NotFound)` - for 404
/// * `Err(AppError::Unexpected(status))` - for any other status
/// * `Err(AppError::Network(_))` - if the request could not be sent
pub async fn send_request<B: Serialize + ?Sized>(
    client: &Client,
    request: OutgoingRequest,
    body: Option<&B>,
) -> Result<Response, AppError> {
    let OutgoingRequest {
        method,
        url,
        headers,
    } = request;

    debug!("{} {}", method, url);

    let mut builder = client.request(method, url.as_str()).headers(headers);
    if let Some(b) = body {
        builder = builder.json(b);
    }

    let response = builder.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    debug!("Request to {} failed with status {}: {}", url, status, body_text);

    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
        StatusCode::NOT_FOUND => Err(AppError::NotFound),
        _ => Err(AppError::Unexpected(status)),
    }
}

/// Decodes a JSON response body
///
/// An empty body decodes as JSON `null`, so `()`, `Option<_>` and
/// `serde_json::Value` targets accept `204 No Content`.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_str("null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
