//! Artists service for artist details and discographies.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Artist, ArtistId, ArtistReleaseSort, ArtistReleasesPage};
use crate::Result;

use super::{paging_query, PageQuery};

/// Service for artist operations.
///
/// # Example
///
/// ```no_run
/// use discogs_rs::ArtistId;
/// use discogs_rs::api::PageQuery;
///
/// # async fn example(client: discogs_rs::DiscogsClient) -> discogs_rs::Result<()> {
/// let artist = client.artists().get(ArtistId::new(108713)).await?;
/// println!("{}", artist.name);
///
/// let page = client.artists()
///     .releases(ArtistId::new(108713), Some(PageQuery::default().sort("year")))
///     .await?;
/// println!("{} releases", page.pagination.items);
/// # Ok(())
/// # }
/// ```
pub struct ArtistsService {
    inner: Arc<ClientInner>,
}

impl ArtistsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get an artist by ID.
    pub async fn get(&self, id: ArtistId) -> Result<Artist> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("artists/{}", id)).await
    }

    /// List a page of an artist's releases.
    pub async fn releases(
        &self,
        id: ArtistId,
        query: Option<PageQuery>,
    ) -> Result<ArtistReleasesPage> {
        self.inner.wait_for_quota().await;

        let query = query.unwrap_or_default();
        let sort = ArtistReleaseSort::from_param(query.sort.as_deref());
        self.inner
            .get(&format!(
                "artists/{}/releases?{}",
                id,
                paging_query(sort.as_str(), &query, self.inner.per_page())
            ))
            .await
    }
}
