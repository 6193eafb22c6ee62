//! User profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Discogs user profile.
///
/// Fields beyond the identifiers are only populated for the
/// authenticated user's own profile; other profiles expose a public
/// subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: u64,
    /// Username.
    pub username: String,
    /// API URL for this user.
    #[serde(default)]
    pub resource_url: Option<String>,
    /// Profile page URL.
    #[serde(default)]
    pub uri: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form profile text.
    #[serde(default)]
    pub profile: Option<String>,
    /// Home page URL, if set.
    #[serde(default)]
    pub home_page: Option<String>,
    /// Location, if set.
    #[serde(default)]
    pub location: Option<String>,
    /// Registration timestamp.
    #[serde(default)]
    pub registered: Option<DateTime<Utc>>,
    /// Number of items in the user's collection.
    #[serde(default)]
    pub num_collection: Option<u64>,
    /// Number of items in the user's wantlist.
    #[serde(default)]
    pub num_wantlist: Option<u64>,
    /// Number of marketplace items for sale.
    #[serde(default)]
    pub num_for_sale: Option<u64>,
    /// Number of contributions ("rank" on the site).
    #[serde(default)]
    pub releases_contributed: Option<u64>,
    /// Average rating given by this user.
    #[serde(default)]
    pub rating_avg: Option<f64>,
    /// Email, present only for the authenticated user.
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_public_profile() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "username": "rodneyfool",
                "resource_url": "https://api.discogs.com/users/rodneyfool",
                "num_collection": 78
            }"#,
        )
        .unwrap();
        assert_eq!(user.username, "rodneyfool");
        assert_eq!(user.num_collection, Some(78));
        assert!(user.email.is_none());
    }
}
