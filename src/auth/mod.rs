//! Authentication for the Discogs API.
//!
//! Discogs supports two header-based schemes: a personal access token
//! (`Authorization: Discogs token=...`) and a consumer key/secret pair
//! (`Authorization: Discogs key=..., secret=...`). There is no login
//! round-trip; the credential is simply attached to every request.
//! Anonymous access is also valid, at a lower rate limit.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding a personal access token.
pub const ENV_TOKEN: &str = "DISCOGS_API_TOKEN";
/// Environment variable holding a consumer key.
pub const ENV_KEY: &str = "DISCOGS_API_KEY";
/// Environment variable holding a consumer secret.
pub const ENV_SECRET: &str = "DISCOGS_API_SECRET";

/// A Discogs API credential.
///
/// Secrets are held in [`SecretString`] so they are zeroized on drop
/// and redacted from `Debug` output.
#[derive(Clone)]
pub enum Credentials {
    /// A personal access token.
    Token(SecretString),
    /// A consumer key and secret pair.
    KeySecret {
        /// Consumer key.
        key: String,
        /// Consumer secret.
        secret: SecretString,
    },
}

impl Credentials {
    /// Create credentials from a personal access token.
    pub fn token(token: impl Into<String>) -> Self {
        Credentials::Token(SecretString::from(token.into()))
    }

    /// Create credentials from a consumer key and secret.
    pub fn key_secret(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials::KeySecret {
            key: key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Resolve credentials from explicit values with environment
    /// fallback.
    ///
    /// A token (explicit or `DISCOGS_API_TOKEN`) wins over a key/secret
    /// pair; a key or secret alone yields no credential. Returns `None`
    /// when nothing is configured, which produces anonymous requests.
    pub fn resolve(
        token: Option<String>,
        key: Option<String>,
        secret: Option<String>,
    ) -> Option<Self> {
        if let Some(token) = token.or_else(|| std::env::var(ENV_TOKEN).ok()) {
            return Some(Credentials::token(token));
        }

        let key = key.or_else(|| std::env::var(ENV_KEY).ok());
        let secret = secret.or_else(|| std::env::var(ENV_SECRET).ok());
        match (key, secret) {
            (Some(key), Some(secret)) => Some(Credentials::key_secret(key, secret)),
            _ => None,
        }
    }

    /// Render the `Authorization` header value for this credential.
    pub fn header_value(&self) -> String {
        match self {
            Credentials::Token(token) => {
                format!("Discogs token={}", token.expose_secret())
            }
            Credentials::KeySecret { key, secret } => {
                format!("Discogs key={}, secret={}", key, secret.expose_secret())
            }
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Token(_) => f.write_str("Credentials::Token(***)"),
            Credentials::KeySecret { key, .. } => f
                .debug_struct("Credentials::KeySecret")
                .field("key", key)
                .field("secret", &"***")
                .finish(),
        }
    }
}
