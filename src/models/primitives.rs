//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around resource
//! identifiers to prevent mixing up different kinds of IDs at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new identifier.
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw numeric value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id! {
    /// A Discogs release identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use discogs_rs::ReleaseId;
    ///
    /// let id = ReleaseId::new(249504);
    /// assert_eq!(id.to_string(), "249504");
    /// ```
    ReleaseId
}

numeric_id! {
    /// A Discogs master release identifier.
    MasterId
}

numeric_id! {
    /// A Discogs artist identifier.
    ArtistId
}

numeric_id! {
    /// A Discogs label identifier.
    LabelId
}

numeric_id! {
    /// A collection folder identifier.
    ///
    /// Folder `0` is the special "All" folder and folder `1` is
    /// "Uncategorized"; both exist for every user.
    FolderId
}

impl FolderId {
    /// The "All" folder, containing every release in the collection.
    pub const ALL: FolderId = FolderId(0);

    /// The "Uncategorized" folder.
    pub const UNCATEGORIZED: FolderId = FolderId(1);
}

/// A Discogs username.
///
/// # Example
///
/// ```
/// use discogs_rs::Username;
///
/// let user = Username::new("rodneyfool");
/// assert_eq!(user.as_str(), "rodneyfool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Create a new username from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the username is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
