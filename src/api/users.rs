//! Users service for profile lookups.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::User;
use crate::Result;

/// Service for user profile operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: discogs_rs::DiscogsClient) -> discogs_rs::Result<()> {
/// let profile = client.users().profile().await?;
/// println!("{} has {} releases", profile.username, profile.num_collection.unwrap_or(0));
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the configured user's profile.
    ///
    /// This call skips the pre-call quota check so it stays usable for
    /// probing the rate limit itself.
    pub async fn profile(&self) -> Result<User> {
        self.inner
            .get(&format!("users/{}", self.inner.username()))
            .await
    }
}
