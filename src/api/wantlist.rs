//! Wantlist service for the configured user's wantlist.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CollectionSort, WantlistPage};
use crate::Result;

use super::{paging_query, PageQuery};

/// Service for wantlist operations.
pub struct WantlistService {
    inner: Arc<ClientInner>,
}

impl WantlistService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List a page of the user's wantlist.
    ///
    /// Wantlists accept the same sort keys as collections.
    pub async fn list(&self, query: Option<PageQuery>) -> Result<WantlistPage> {
        self.inner.wait_for_quota().await;

        let query = query.unwrap_or_default();
        let sort = CollectionSort::from_param(query.sort.as_deref());
        self.inner
            .get(&format!(
                "users/{}/wants?{}",
                self.inner.username(),
                paging_query(sort.as_str(), &query, self.inner.per_page())
            ))
            .await
    }
}
