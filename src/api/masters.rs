//! Masters service for master releases and their versions.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Master, MasterId, MasterVersionsPage};
use crate::Result;

/// Service for master release operations.
pub struct MastersService {
    inner: Arc<ClientInner>,
}

impl MastersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a master release by ID.
    pub async fn get(&self, id: MasterId) -> Result<Master> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("masters/{}", id)).await
    }

    /// List the versions of a master release.
    pub async fn versions(&self, id: MasterId) -> Result<MasterVersionsPage> {
        self.inner.wait_for_quota().await;
        self.inner.get(&format!("masters/{}/versions", id)).await
    }
}
