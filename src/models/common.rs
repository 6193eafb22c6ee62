//! Shared response fragments used across endpoints.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every paged response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed).
    pub page: u32,
    /// Total number of pages.
    pub pages: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub items: u64,
    /// Links to neighboring pages.
    #[serde(default)]
    pub urls: PageUrls,
}

impl Pagination {
    /// Check if there are more pages after the current one.
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }

    /// Get the next page number, if available.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

/// Ready-made URLs for neighboring pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageUrls {
    /// URL of the first page.
    #[serde(default)]
    pub first: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub prev: Option<String>,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the last page.
    #[serde(default)]
    pub last: Option<String>,
}

/// An image attached to a release, artist, or label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Image kind, `primary` or `secondary`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Full-resolution URL.
    #[serde(default)]
    pub uri: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub uri150: Option<String>,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
}

/// An artist credit as embedded in release documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCredit {
    /// Artist identifier.
    pub id: u64,
    /// Artist name as credited.
    pub name: String,
    /// Artist name variation, if credited differently.
    #[serde(default)]
    pub anv: Option<String>,
    /// Join phrase between this credit and the next ("feat.", "&").
    #[serde(default)]
    pub join: Option<String>,
    /// Role on the release.
    #[serde(default)]
    pub role: Option<String>,
    /// API URL for the artist resource.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A media format entry (vinyl, CD, cassette, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    /// Format name.
    pub name: String,
    /// Quantity of this format in the release.
    #[serde(default)]
    pub qty: Option<String>,
    /// Format descriptors ("LP", "Album", "Reissue").
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// A label credit as embedded in release documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCredit {
    /// Label identifier.
    pub id: u64,
    /// Label name.
    pub name: String,
    /// Catalog number on this label.
    #[serde(default)]
    pub catno: Option<String>,
    /// API URL for the label resource.
    #[serde(default)]
    pub resource_url: Option<String>,
}
