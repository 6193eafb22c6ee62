//! Releases service for release details, ratings, and stats.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CommunityRating, Release, ReleaseId, ReleaseStats, UserRating};
use crate::Result;

/// Service for release operations.
///
/// Identifiers are passed through unvalidated; a malformed or unknown
/// identifier surfaces as whatever error the API returns, typically
/// [`Error::NotFound`](crate::Error::NotFound).
///
/// # Example
///
/// ```no_run
/// use discogs_rs::ReleaseId;
///
/// # async fn example(client: discogs_rs::DiscogsClient) -> discogs_rs::Result<()> {
/// let release = client.releases().get(ReleaseId::new(249504)).await?;
/// println!("{}", release.title);
///
/// let rating = client.releases().community_rating(ReleaseId::new(249504)).await?;
/// println!("{} votes, {:.1} average", rating.rating.count, rating.rating.average);
/// # Ok(())
/// # }
/// ```
pub struct ReleasesService {
    inner: Arc<ClientInner>,
}

impl ReleasesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a release by ID.
    pub async fn get(&self, id: ReleaseId) -> Result<Release> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("releases/{}", id)).await
    }

    /// Get the configured user's rating of a release.
    pub async fn user_rating(&self, id: ReleaseId) -> Result<UserRating> {
        self.inner.wait_for_quota().await;
        self.inner
            .get(&format!(
                "releases/{}/rating/{}",
                id,
                self.inner.username()
            ))
            .await
    }

    /// Get the community's aggregate rating of a release.
    pub async fn community_rating(&self, id: ReleaseId) -> Result<CommunityRating> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("releases/{}/rating", id)).await
    }

    /// Get community ownership statistics for a release.
    pub async fn stats(&self, id: ReleaseId) -> Result<ReleaseStats> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("releases/{}/stats", id)).await
    }
}
