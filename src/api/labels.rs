//! Labels service for label details and their catalogs.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Label, LabelId, LabelReleaseSort, LabelReleasesPage};
use crate::Result;

use super::{paging_query, PageQuery};

/// Service for label operations.
pub struct LabelsService {
    inner: Arc<ClientInner>,
}

impl LabelsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a label by ID.
    pub async fn get(&self, id: LabelId) -> Result<Label> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("labels/{}", id)).await
    }

    /// List a page of a label's releases.
    pub async fn releases(
        &self,
        id: LabelId,
        query: Option<PageQuery>,
    ) -> Result<LabelReleasesPage> {
        self.inner.wait_for_quota().await;

        let query = query.unwrap_or_default();
        let sort = LabelReleaseSort::from_param(query.sort.as_deref());
        self.inner
            .get(&format!(
                "labels/{}/releases?{}",
                id,
                paging_query(sort.as_str(), &query, self.inner.per_page())
            ))
            .await
    }
}
