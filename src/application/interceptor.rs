/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Hooks run on every outgoing request before dispatch.

use crate::model::http::OutgoingRequest;
use crate::session::credentials::CredentialProvider;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::sync::Arc;
use tracing::{debug, warn};

/// Inspects and mutates a request before it is sent
///
/// Interceptors run synchronously, in registration order, and cannot fail.
pub trait RequestInterceptor: Send + Sync {
    /// Called once per request
    fn intercept(&self, request: &mut OutgoingRequest);
}

/// Attaches `Authorization: Bearer <token>` when a credential is available
///
/// Without one the request goes out unchanged and a warning is logged.
/// The header value is marked sensitive and the token is never logged.
#[derive(Clone)]
pub struct AuthInterceptor {
    credentials: Arc<dyn CredentialProvider>,
}

impl AuthInterceptor {
    /// Creates an interceptor reading from `credentials`
    pub fn new(credentials: impl CredentialProvider + 'static) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }

    /// Creates an interceptor sharing an existing provider
    pub fn from_shared(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn intercept(&self, request: &mut OutgoingRequest) {
        let Some(token) = self.credentials.token() else {
            warn!(
                "No token found in store, sending {} {} without Authorization",
                request.method, request.url
            );
            return;
        };

        match HeaderValue::from_str(&token.bearer()) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
                debug!("Authorization attached to {} {}", request.method, request.url);
            }
            Err(_) => warn!(
                "Stored token {:?} is not a valid header value, sending {} {} without Authorization",
                token, request.method, request.url
            ),
        }
    }
}
