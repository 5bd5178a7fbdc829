/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Credential supply for outgoing requests.
//!
//! Clients never read storage directly; they receive a [`CredentialProvider`]
//! at construction time and ask it for the current [`Token`] on every request.

use crate::constants::{REDACTED, TOKEN_KEY};
use crate::storage::token_store::TokenStore;
use std::fmt;
use std::sync::Arc;

/// Bearer credential
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wraps a raw credential string, as stored by the login flow
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header: `Bearer <token>`
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({REDACTED})")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Supplies the current credential, if any
pub trait CredentialProvider: Send + Sync {
    /// Returns the credential to attach to the next request
    fn token(&self) -> Option<Token>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<Token> {
        self().map(Token::new)
    }
}

/// Provider that never has a credential
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn token(&self) -> Option<Token> {
        None
    }
}

/// Reads the credential from a [`TokenStore`] under a fixed key on every call
#[derive(Clone)]
pub struct StoredCredentials {
    store: Arc<dyn TokenStore>,
    key: String,
}

impl StoredCredentials {
    /// Reads `key` from `store`
    pub fn new(store: Arc<dyn TokenStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Reads the default `"token"` key from `store`
    pub fn with_default_key(store: Arc<dyn TokenStore>) -> Self {
        Self::new(store, TOKEN_KEY)
    }

    /// Key this provider reads
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl CredentialProvider for StoredCredentials {
    fn token(&self) -> Option<Token> {
        self.store.get(&self.key).map(Token::new)
    }
}

impl fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
