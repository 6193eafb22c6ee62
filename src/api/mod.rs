//! API service modules for Discogs endpoints.
//!
//! Each service provides methods for one resource family. Services are
//! cheap to create and hold only a reference to the shared client
//! internals.

mod artists;
mod collection;
mod labels;
mod masters;
mod releases;
mod users;
mod wantlist;

pub use artists::ArtistsService;
pub use collection::CollectionService;
pub use labels::LabelsService;
pub use masters::MastersService;
pub use releases::ReleasesService;
pub use users::UsersService;
pub use wantlist::WantlistService;

use crate::models::SortOrder;

/// Paging and sorting parameters for listing endpoints.
///
/// All fields are optional; missing values take the documented
/// defaults (page 1, descending order, resource-specific sort key).
/// Sort keys are passed as raw strings and validated against each
/// resource's allow-list, with unrecognized keys falling back to the
/// resource default rather than erroring.
///
/// # Example
///
/// ```
/// use discogs_rs::api::PageQuery;
///
/// let query = PageQuery::default().page(2).sort("artist");
/// ```
#[derive(Debug, Default, Clone)]
pub struct PageQuery {
    /// Page number, 1-indexed.
    pub page: Option<u32>,
    /// Raw sort key.
    pub sort: Option<String>,
    /// Raw sort order, `asc` or `desc`.
    pub sort_order: Option<String>,
}

impl PageQuery {
    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the sort key.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the sort order.
    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }
}

/// Compose the canonical query string for a sorted, paged listing.
pub(crate) fn paging_query(sort: &str, query: &PageQuery, per_page: u32) -> String {
    let order = SortOrder::from_param(query.sort_order.as_deref());
    let page = query.page.unwrap_or(1);
    format!(
        "sort={}&sort_order={}&per_page={}&page={}",
        sort, order, per_page, page
    )
}
