/// Credential providers and the redacting token type
pub mod credentials;

pub use credentials::{CredentialProvider, StoredCredentials, Token};
