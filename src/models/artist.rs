//! Artist models.

use serde::{Deserialize, Serialize};

use super::common::{Image, Pagination};

/// A full artist document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Artist identifier.
    pub id: u64,
    /// Primary name.
    pub name: String,
    /// Real name, if known.
    #[serde(default)]
    pub realname: Option<String>,
    /// Free-form biography.
    #[serde(default)]
    pub profile: Option<String>,
    /// External URLs.
    #[serde(default)]
    pub urls: Vec<String>,
    /// Alternate spellings of the name.
    #[serde(default)]
    pub namevariations: Vec<String>,
    /// Band members, for groups.
    #[serde(default)]
    pub members: Vec<ArtistRef>,
    /// Other identities of the same artist.
    #[serde(default)]
    pub aliases: Vec<ArtistRef>,
    /// Images.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Editorial data quality flag.
    #[serde(default)]
    pub data_quality: Option<String>,
    /// API URL for the releases listing.
    #[serde(default)]
    pub releases_url: Option<String>,
    /// API URL for this artist.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A reference to another artist (member, alias).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    /// Artist identifier.
    pub id: u64,
    /// Artist name.
    pub name: String,
    /// Whether the membership is current.
    #[serde(default)]
    pub active: Option<bool>,
    /// API URL for the artist.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// One entry in an artist's release listing.
///
/// The listing mixes releases and masters; `kind` distinguishes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRelease {
    /// Release or master identifier.
    pub id: u64,
    /// Title.
    pub title: String,
    /// `release` or `master`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Main release identifier, for master entries.
    #[serde(default)]
    pub main_release: Option<u64>,
    /// Credited artist name.
    #[serde(default)]
    pub artist: Option<String>,
    /// The artist's role ("Main", "Remix", "Appearance").
    #[serde(default)]
    pub role: Option<String>,
    /// Release year.
    #[serde(default)]
    pub year: Option<u32>,
    /// Format summary, for release entries.
    #[serde(default)]
    pub format: Option<String>,
    /// Label name, for release entries.
    #[serde(default)]
    pub label: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
    /// API URL for this entry.
    #[serde(default)]
    pub resource_url: Option<String>,
}

/// A page of an artist's releases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistReleasesPage {
    /// Pagination metadata.
    pub pagination: Pagination,
    /// Releases on this page.
    pub releases: Vec<ArtistRelease>,
}
