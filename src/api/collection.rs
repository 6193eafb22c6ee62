//! Collection service for the configured user's collection.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    CollectionPage, CollectionSort, CollectionValue, FolderId, FolderList,
};
use crate::Result;

use super::{paging_query, PageQuery};

/// Service for collection operations.
///
/// All paths are scoped to the username from the client configuration.
///
/// # Example
///
/// ```no_run
/// use discogs_rs::api::PageQuery;
///
/// # async fn example(client: discogs_rs::DiscogsClient) -> discogs_rs::Result<()> {
/// let page = client.collection()
///     .list(Some(PageQuery::default().sort("artist")))
///     .await?;
/// for item in &page.releases {
///     println!("{}", item.basic_information.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CollectionService {
    inner: Arc<ClientInner>,
}

impl CollectionService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List a page of the user's collection.
    pub async fn list(&self, query: Option<PageQuery>) -> Result<CollectionPage> {
        self.inner.wait_for_quota().await;

        let query = query.unwrap_or_default();
        let sort = CollectionSort::from_param(query.sort.as_deref());
        self.inner
            .get(&format!(
                "users/{}/collection?{}",
                self.inner.username(),
                paging_query(sort.as_str(), &query, self.inner.per_page())
            ))
            .await
    }

    /// List the user's collection folders.
    pub async fn folders(&self) -> Result<FolderList> {
        self.inner.wait_for_quota().await;

        self.inner
            .get(&format!(
                "users/{}/collection/folders",
                self.inner.username()
            ))
            .await
    }

    /// List a page of the releases in one folder.
    pub async fn folder_releases(
        &self,
        folder: FolderId,
        query: Option<PageQuery>,
    ) -> Result<CollectionPage> {
        self.inner.wait_for_quota().await;

        let query = query.unwrap_or_default();
        let sort = CollectionSort::from_param(query.sort.as_deref());
        self.inner
            .get(&format!(
                "users/{}/collection/folders/{}/releases?{}",
                self.inner.username(),
                folder,
                paging_query(sort.as_str(), &query, self.inner.per_page())
            ))
            .await
    }

    /// Get the estimated monetary value of the collection.
    ///
    /// Requires authentication as the collection owner.
    pub async fn value(&self) -> Result<CollectionValue> {
        self.inner.wait_for_quota().await;

        self.inner
            .get(&format!("users/{}/collection/value", self.inner.username()))
            .await
    }
}
