//! Client configuration options.

use std::time::Duration;

use crate::auth::Credentials;
use crate::models::Username;

/// Default API host.
pub const DEFAULT_HOST: &str = "api.discogs.com";
/// Default HTTPS port.
pub const DEFAULT_PORT: u16 = 443;
/// Default page size for paged endpoints.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Environment variable holding the default username.
pub const ENV_USERNAME: &str = "DISCOGS_USER_NAME";
/// Environment variable holding the default page size.
pub const ENV_PER_PAGE: &str = "DISCOGS_PER_PAGE";

/// Configuration for the Discogs client.
///
/// Every field falls back first to an environment variable (where one
/// is defined) and then to a built-in default, so
/// `ClientConfig::default()` alone yields a working anonymous client.
///
/// # Example
///
/// ```
/// use discogs_rs::{ClientConfig, Credentials};
///
/// let config = ClientConfig::default()
///     .with_user_agent("my-crate-digger/1.0")
///     .with_credentials(Credentials::token("abc"))
///     .with_username("rodneyfool");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host.
    pub host: String,
    /// API port. Only rendered into the URL when not 443.
    pub port: u16,
    /// User-Agent header value. Discogs rejects requests without one.
    pub user_agent: String,
    /// Credentials; `None` produces anonymous requests.
    pub credentials: Option<Credentials>,
    /// Username substituted into user-scoped paths.
    pub username: Username,
    /// Page size for paged endpoints.
    pub per_page: u32,
    /// Optional request timeout. `None` means requests wait
    /// indefinitely on a hung connection.
    pub timeout: Option<Duration>,
    /// Full base-URL override, e.g. for a local mock server. When set,
    /// `host` and `port` are ignored.
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_agent: format!("discogs-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            credentials: Credentials::resolve(None, None, None),
            username: Username::new(std::env::var(ENV_USERNAME).unwrap_or_default()),
            per_page: std::env::var(ENV_PER_PAGE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PER_PAGE),
            timeout: None,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the default username for user-scoped endpoints.
    pub fn with_username(mut self, username: impl Into<Username>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the page size for paged endpoints.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the base URL entirely. Intended for tests against a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The base URL requests are issued against.
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref base) = self.base_url {
            return base.trim_end_matches('/').to_string();
        }
        if self.port == DEFAULT_PORT {
            format!("https://{}", self.host)
        } else {
            format!("https://{}:{}", self.host, self.port)
        }
    }
}
