/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Filesystem failure while reading or writing the token store
    Io(std::io::Error),
    /// The server answered 401
    Unauthorized,
    /// The server answered 404
    NotFound,
    /// The server answered with any other non-success status
    Unexpected(StatusCode),
    /// The caller supplied something unusable (bad URL, bad path)
    InvalidInput(String),
    /// The token store could not be read or is corrupt
    Storage(String),
    /// The news lookup failed
    NewsFetch(Box<NewsFetchError>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
            AppError::NewsFetch(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::NewsFetch(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<NewsFetchError> for AppError {
    fn from(e: NewsFetchError) -> Self {
        AppError::NewsFetch(Box::new(e))
    }
}

/// Failure of a news lookup
///
/// Wraps the original cause unchanged so callers can match on it
/// (`Network`, `Unexpected(status)`, `Json`, ...).
#[derive(Debug)]
pub struct NewsFetchError {
    /// Ticker that was being looked up
    pub ticker: String,
    /// Original failure
    pub source: AppError,
}

impl NewsFetchError {
    /// Creates a new error for `ticker` caused by `source`
    pub fn new(ticker: impl Into<String>, source: AppError) -> Self {
        Self {
            ticker: ticker.into(),
            source,
        }
    }

    /// The original failure
    #[must_use]
    pub fn cause(&self) -> &AppError {
        &self.source
    }

    /// Consumes the error and returns the original failure
    #[must_use]
    pub fn into_cause(self) -> AppError {
        self.source
    }

    /// HTTP status returned by the news service, if the failure was a status error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match &self.source {
            AppError::Unexpected(s) => Some(*s),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for NewsFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "news fetch failed for {}: {}", self.ticker, self.source)
    }
}

impl Error for NewsFetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
