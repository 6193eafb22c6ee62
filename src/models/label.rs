//! Label models.

use serde::{Deserialize, Serialize};

use super::common::{Image, Pagination};

/// A full label document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label identifier.
    pub id: u64,
    /// Label name.
    pub name: String,
    /// Free-form profile text.
    #[serde(default)]
    pub profile: Option<String>,
    /// Postal address and contact details.
    #[serde(default)]
    pub contact_info: Option<String>,
    /// External URLs.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Child labels.
    #[serde(default)]
    pub sublabels: Vec<LabelRef>,
    /// Parent label, if any.
    #[serde(default)]
    pub parent_label: Option<LabelRef>,
    /// Images.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Editorial data quality flag.
    #[serde(default)]
    pub data_quality: Option<String>,
    /// API URL for the releases listing.
    #[serde(default)]
    pub releases_url: Option<String>,
    /// API URL for this label.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A reference to another label (sublabel, parent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRef {
    /// Label identifier.
    pub id: u64,
    /// Label name.
    pub name: String,
    /// API URL for the label.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// One entry in a label's release listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRelease {
    /// Release identifier.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Credited artist name.
    #[serde(default)]
    pub artist: Option<String>,
    /// Catalog number.
    #[serde(default)]
    pub catno: Option<String>,
    /// Format summary.
    #[serde(default)]
    pub format: Option<String>,
    /// Release year.
    #[serde(default)]
    pub year: Option<u32>,
    /// Editorial status ("Accepted").
    #[serde(default)]
    pub status: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
    /// API URL for this release.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A page of a label's releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelReleasesPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Releases on this page.
    pub releases: Vec<LabelRelease>,
}
