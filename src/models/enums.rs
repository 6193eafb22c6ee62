//! Sort keys and sort orders accepted by paged endpoints.
//!
//! Discogs only recognizes a fixed set of sort keys per resource. An
//! unrecognized key is not an error: it falls back to the resource's
//! default, matching the server's own lenient handling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for sorted listings. Defaults to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

impl SortOrder {
    /// The query-string value for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parse a raw parameter, falling back to [`SortOrder::Desc`] when
    /// the value is missing or unrecognized.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort keys for collection, wantlist, and folder-contents listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionSort {
    /// Date the item was added (default).
    #[default]
    Added,
    /// Release year.
    Year,
    /// Artist name.
    Artist,
    /// Release title.
    Title,
    /// Catalog number.
    Catno,
    /// Media format.
    Format,
    /// User rating.
    Rating,
}

impl CollectionSort {
    /// The query-string value for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionSort::Added => "added",
            CollectionSort::Year => "year",
            CollectionSort::Artist => "artist",
            CollectionSort::Title => "title",
            CollectionSort::Catno => "catno",
            CollectionSort::Format => "format",
            CollectionSort::Rating => "rating",
        }
    }

    /// Parse a raw parameter against the allow-list, falling back to
    /// [`CollectionSort::Added`] when missing or unrecognized.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("year") => CollectionSort::Year,
            Some("artist") => CollectionSort::Artist,
            Some("title") => CollectionSort::Title,
            Some("catno") => CollectionSort::Catno,
            Some("format") => CollectionSort::Format,
            Some("rating") => CollectionSort::Rating,
            _ => CollectionSort::Added,
        }
    }
}

impl fmt::Display for CollectionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort keys for artist release listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistReleaseSort {
    /// Release title (default).
    #[default]
    Title,
    /// Release year.
    Year,
    /// Media format.
    Format,
}

impl ArtistReleaseSort {
    /// The query-string value for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistReleaseSort::Title => "title",
            ArtistReleaseSort::Year => "year",
            ArtistReleaseSort::Format => "format",
        }
    }

    /// Parse a raw parameter, falling back to
    /// [`ArtistReleaseSort::Title`] when missing or unrecognized.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("year") => ArtistReleaseSort::Year,
            Some("format") => ArtistReleaseSort::Format,
            _ => ArtistReleaseSort::Title,
        }
    }
}

impl fmt::Display for ArtistReleaseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort keys for label release listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelReleaseSort {
    /// Release title (default).
    #[default]
    Title,
    /// Release year.
    Year,
    /// Artist name.
    Artist,
    /// Catalog number.
    Catno,
    /// Media format.
    Format,
}

impl LabelReleaseSort {
    /// The query-string value for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelReleaseSort::Title => "title",
            LabelReleaseSort::Year => "year",
            LabelReleaseSort::Artist => "artist",
            LabelReleaseSort::Catno => "catno",
            LabelReleaseSort::Format => "format",
        }
    }

    /// Parse a raw parameter, falling back to
    /// [`LabelReleaseSort::Title`] when missing or unrecognized.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("year") => LabelReleaseSort::Year,
            Some("artist") => LabelReleaseSort::Artist,
            Some("catno") => LabelReleaseSort::Catno,
            Some("format") => LabelReleaseSort::Format,
            _ => LabelReleaseSort::Title,
        }
    }
}

impl fmt::Display for LabelReleaseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
