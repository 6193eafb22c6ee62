//! Collection and wantlist models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ArtistCredit, Format, LabelCredit, Pagination};

/// A collection folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Folder identifier.
    pub id: u64,
    /// Folder name.
    pub name: String,
    /// Number of releases in the folder.
    #[serde(default)]
    pub count: u64,
    /// API URL for this folder.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// Response for the folder listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderList {
    /// All folders in the user's collection.
    pub folders: Vec<Folder>,
}

/// The abbreviated release document embedded in collection and
/// wantlist items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInformation {
    /// Release identifier.
    pub id: u64,
    /// Master release identifier, 0 when the release has no master.
    #[serde(default)]
    pub master_id: Option<u64>,
    /// Release title.
    pub title: String,
    /// Release year, 0 when unknown.
    #[serde(default)]
    pub year: Option<u32>,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
    /// Labels and catalog numbers.
    #[serde(default)]
    pub labels: Vec<LabelCredit>,
    /// Media formats.
    #[serde(default)]
    pub formats: Vec<Format>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Styles.
    #[serde(default)]
    pub styles: Vec<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// API URL for the full release.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// One release instance in a collection folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Release identifier.
    pub id: u64,
    /// Instance identifier; the same release can appear in a
    /// collection more than once.
    #[serde(default)]
    pub instance_id: Option<u64>,
    /// Folder holding this instance.
    #[serde(default)]
    pub folder_id: Option<u64>,
    /// The user's rating, 0 when unrated.
    #[serde(default)]
    pub rating: u8,
    /// When the instance was added.
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    /// Abbreviated release document.
    pub basic_information: BasicInformation,
}

/// A page of collection releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Releases on this page.
    pub releases: Vec<CollectionItem>,
}

/// One wantlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Want {
    /// Release identifier.
    pub id: u64,
    /// The user's rating, 0 when unrated.
    #[serde(default)]
    pub rating: u8,
    /// Optional notes on the want.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the want was added.
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    /// Abbreviated release document.
    pub basic_information: BasicInformation,
}

/// A page of wantlist entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WantlistPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Wants on this page.
    pub wants: Vec<Want>,
}

/// Estimated monetary value of a collection.
///
/// Values arrive as pre-formatted currency strings ("$1,234.56"); the
/// API does not expose them numerically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionValue {
    /// Value assuming the lowest sale price for every item.
    pub minimum: String,
    /// Value assuming the median sale price for every item.
    pub median: String,
    /// Value assuming the highest sale price for every item.
    pub maximum: String,
}
