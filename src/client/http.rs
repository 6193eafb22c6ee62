//! HTTP client implementation for the Discogs API.

use std::sync::{Arc, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};

use crate::api::{
    ArtistsService, CollectionService, LabelsService, MastersService, ReleasesService,
    UsersService, WantlistService,
};
use crate::models::RateLimit;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Discogs API.
///
/// The client provides access to each resource family through service
/// accessors. It owns the connection configuration and the most recent
/// rate-limit snapshot; every response overwrites the snapshot, and
/// throttled endpoints consult it before issuing a request.
///
/// # Example
///
/// ```no_run
/// use discogs_rs::{DiscogsClient, ClientConfig, Credentials, ReleaseId};
///
/// # async fn example() -> discogs_rs::Result<()> {
/// let client = DiscogsClient::with_config(
///     ClientConfig::default()
///         .with_credentials(Credentials::token("abc"))
///         .with_username("rodneyfool"),
/// )?;
///
/// let release = client.releases().get(ReleaseId::new(249504)).await?;
/// println!("{} ({})", release.title, release.year.unwrap_or(0));
///
/// let remaining = client.rate_limit().remaining;
/// println!("{} requests left this minute", remaining);
/// # Ok(())
/// # }
/// ```
pub struct DiscogsClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) rate_limit: RwLock<RateLimit>,
}

impl DiscogsClient {
    /// Create a client from environment variables and defaults.
    ///
    /// Missing credentials are not an error; they produce anonymous
    /// requests at the lower anonymous rate limit.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                rate_limit: RwLock::new(RateLimit::default()),
            }),
        })
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the collection service.
    pub fn collection(&self) -> CollectionService {
        CollectionService::new(self.inner.clone())
    }

    /// Get the wantlist service.
    pub fn wantlist(&self) -> WantlistService {
        WantlistService::new(self.inner.clone())
    }

    /// Get the releases service.
    pub fn releases(&self) -> ReleasesService {
        ReleasesService::new(self.inner.clone())
    }

    /// Get the master releases service.
    pub fn masters(&self) -> MastersService {
        MastersService::new(self.inner.clone())
    }

    /// Get the artists service.
    pub fn artists(&self) -> ArtistsService {
        ArtistsService::new(self.inner.clone())
    }

    /// Get the labels service.
    pub fn labels(&self) -> LabelsService {
        LabelsService::new(self.inner.clone())
    }

    /// The most recent rate-limit snapshot.
    ///
    /// Reflects the headers of the last response seen, not real-time
    /// server state; it is stale between requests.
    pub fn rate_limit(&self) -> RateLimit {
        *self.inner.rate_limit.read().expect("rate limit lock poisoned")
    }

    /// Issue a GET against an arbitrary provider-relative path.
    ///
    /// Bypasses endpoint-specific parameter normalization and the
    /// pre-call throttle check, returning the raw JSON body. Useful for
    /// endpoints this crate does not model.
    pub async fn get_raw(&self, path: &str) -> Result<serde_json::Value> {
        self.inner.get(path).await
    }
}

impl ClientInner {
    /// Build the absolute URL for a provider-relative path.
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path.trim_start_matches('/'))
    }

    /// Build request headers, attaching authorization only when a
    /// credential is configured.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|_| Error::Config("Invalid user agent".to_string()))?,
        );

        if let Some(ref credentials) = self.config.credentials {
            let mut value = HeaderValue::from_str(&credentials.header_value())
                .map_err(|_| Error::Config("Invalid credential characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Issue a GET request and deserialize the body.
    ///
    /// This is the single choke point all endpoint methods funnel
    /// through. The rate-limit snapshot is overwritten from the
    /// response headers as a side effect, on error responses too.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = url::Url::parse(&self.url_for(path))?;
        let headers = self.build_headers()?;

        tracing::debug!(%url, "GET");
        let response = self.http.get(url).headers(headers).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        self.update_rate_limit(response.headers());
        tracing::debug!(status = status.as_u16(), "response");

        if status.is_success() {
            let bytes = response.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(Error::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(Error::from_api_response(status.as_u16(), body))
    }

    /// Overwrite the snapshot from response headers. The previous value
    /// is discarded unconditionally; last writer wins under the lock.
    fn update_rate_limit(&self, headers: &HeaderMap) {
        if !RateLimit::present_in(headers) {
            return;
        }
        let snapshot = RateLimit::from_headers(headers);
        let mut guard = self.rate_limit.write().expect("rate limit lock poisoned");
        *guard = snapshot;
    }

    /// Read the current snapshot.
    pub(crate) fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.read().expect("rate limit lock poisoned")
    }

    /// The configured page size.
    pub(crate) fn per_page(&self) -> u32 {
        self.config.per_page
    }

    /// The configured default username.
    pub(crate) fn username(&self) -> &str {
        self.config.username.as_str()
    }
}

impl Clone for DiscogsClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for DiscogsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscogsClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
