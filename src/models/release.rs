//! Release, master release, and rating models.

use serde::{Deserialize, Serialize};

use super::common::{ArtistCredit, Format, Image, LabelCredit, Pagination};

/// A full release document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release identifier.
    pub id: u64,
    /// Release title.
    pub title: String,
    /// Master release identifier, if the release belongs to one.
    #[serde(default)]
    pub master_id: Option<u64>,
    /// Release year, 0 when unknown.
    #[serde(default)]
    pub year: Option<u32>,
    /// Country of release.
    #[serde(default)]
    pub country: Option<String>,
    /// Release date as free text ("1987-05-11", "1987").
    #[serde(default)]
    pub released: Option<String>,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
    /// Extra credits (producers, engineers, ...).
    #[serde(default)]
    pub extraartists: Vec<ArtistCredit>,
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
    /// Tracklist.
    #[serde(default)]
    pub tracklist: Vec<Track>,
    /// Images.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Liner notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Community have/want/rating statistics.
    #[serde(default)]
    pub community: Option<Community>,
    /// Number of marketplace listings.
    #[serde(default)]
    pub num_for_sale: Option<u64>,
    /// Lowest marketplace price.
    #[serde(default)]
    pub lowest_price: Option<f64>,
    /// Editorial data quality flag.
    #[serde(default)]
    pub data_quality: Option<String>,
    /// API URL for this release.
    #[serde(default)]
    pub resource_url: Option<String>,
    /// Site URL for this release.
    #[serde(default)]
    pub uri: Option<String>,
}

/// One entry in a tracklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Side/track position ("A1", "3").
    #[serde(default)]
    pub position: String,
    /// Track title.
    pub title: String,
    /// Duration as "MM:SS", empty when unknown.
    #[serde(default)]
    pub duration: String,
    /// Entry type, usually `track`.
    #[serde(rename = "type_", default)]
    pub kind: Option<String>,
}

/// Community statistics embedded in a release document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Number of users who have this release.
    #[serde(default)]
    pub have: u64,
    /// Number of users who want this release.
    #[serde(default)]
    pub want: u64,
    /// Aggregate rating.
    #[serde(default)]
    pub rating: Option<AverageRating>,
}

/// An aggregate rating: count of votes and their mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageRating {
    /// Number of ratings.
    pub count: u64,
    /// Mean rating, 1.0 through 5.0.
    pub average: f64,
}

/// A single user's rating of a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRating {
    /// Release identifier.
    pub release_id: u64,
    /// Rating owner.
    pub username: String,
    /// Rating value, 0 (unrated) through 5.
    pub rating: u8,
}

/// The community's aggregate rating of a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityRating {
    /// Release identifier.
    pub release_id: u64,
    /// Aggregate rating.
    pub rating: AverageRating,
}

/// Community ownership statistics for a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseStats {
    /// Number of users who have this release.
    #[serde(default)]
    pub num_have: Option<u64>,
    /// Number of users who want this release.
    #[serde(default)]
    pub num_want: Option<u64>,
    /// Whether the release is flagged as offensive.
    #[serde(default)]
    pub is_offensive: Option<bool>,
}

/// A master release: the canonical grouping of all versions of a
/// release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Master {
    /// Master identifier.
    pub id: u64,
    /// Title.
    pub title: String,
    /// The key release representing this master.
    #[serde(default)]
    pub main_release: Option<u64>,
    /// Year of the earliest version.
    #[serde(default)]
    pub year: Option<u32>,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Styles.
    #[serde(default)]
    pub styles: Vec<String>,
    /// Tracklist.
    #[serde(default)]
    pub tracklist: Vec<Track>,
    /// Images.
    #[serde(default)]
    pub images: Vec<Image>,
    /// API URL for the versions listing.
    #[serde(default)]
    pub versions_url: Option<String>,
    /// Number of marketplace listings.
    #[serde(default)]
    pub num_for_sale: Option<u64>,
    /// Lowest marketplace price.
    #[serde(default)]
    pub lowest_price: Option<f64>,
    /// Editorial data quality flag.
    #[serde(default)]
    pub data_quality: Option<String>,
    /// API URL for this master.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// One version of a master release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterVersion {
    /// Release identifier of this version.
    pub id: u64,
    /// Version title.
    pub title: String,
    /// Format summary ("LP, Album").
    #[serde(default)]
    pub format: Option<String>,
    /// Label name.
    #[serde(default)]
    pub label: Option<String>,
    /// Catalog number.
    #[serde(default)]
    pub catno: Option<String>,
    /// Country of release.
    #[serde(default)]
    pub country: Option<String>,
    /// Release date as free text.
    #[serde(default)]
    pub released: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
    /// API URL for this version.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A page of master release versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterVersionsPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Versions on this page.
    pub versions: Vec<MasterVersion>,
}
