//! # discogs-rs
//!
//! A typed async Rust client for the Discogs REST API v2.
//!
//! This crate wraps the Discogs music-catalog API: user collections and
//! wantlists, releases, master releases, artists, and labels. It tracks
//! the server-reported rate-limit counters on every response and cools
//! down automatically before a call when the remaining quota runs low.
//!
//! ## Features
//!
//! - **Authentication**: personal access token or consumer key/secret,
//!   resolved from arguments or environment variables; anonymous access
//!   works too
//! - **Typed responses**: serde models per endpoint instead of raw JSON
//! - **Typed errors**: transport, decode, and provider errors are
//!   distinct variants; "not found" is not "network down"
//! - **Rate-limit tracking**: a snapshot of the `x-discogs-ratelimit*`
//!   headers, refreshed on every response behind a lock
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use discogs_rs::{DiscogsClient, ClientConfig, Credentials, ReleaseId};
//!
//! #[tokio::main]
//! async fn main() -> discogs_rs::Result<()> {
//!     let client = DiscogsClient::with_config(
//!         ClientConfig::default()
//!             .with_user_agent("my-crate-digger/1.0")
//!             .with_credentials(Credentials::token("your-token"))
//!             .with_username("your-username"),
//!     )?;
//!
//!     // Fetch a release
//!     let release = client.releases().get(ReleaseId::new(249504)).await?;
//!     println!("{} ({})", release.title, release.year.unwrap_or(0));
//!
//!     // Browse the collection
//!     let page = client.collection().list(None).await?;
//!     for item in &page.releases {
//!         println!("- {}", item.basic_information.title);
//!     }
//!
//!     // Check the remaining quota
//!     println!("{} requests left", client.rate_limit().remaining);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate limiting
//!
//! Discogs reports a rolling one-minute quota in its response headers.
//! The client caches the latest values; when the cached `remaining`
//! count is at or below a small floor, the next throttled call sleeps
//! through a fixed cooldown before hitting the network. The cache is a
//! snapshot of the last response, never a live view — in particular it
//! is not refreshed by the cooldown itself, since that would cost a
//! request from the very quota being protected.
//!
//! ## Unmodeled endpoints
//!
//! [`DiscogsClient::get_raw`] issues a GET against any
//! provider-relative path and returns the raw JSON body, for endpoints
//! this crate has no models for.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ClientConfig, DiscogsClient};
pub use error::{Error, Result};
pub use models::{
    ArtistId, FolderId, LabelId, MasterId, RateLimit, ReleaseId, SortOrder, Username,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use discogs_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::PageQuery;
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, DiscogsClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ArtistId, FolderId, LabelId, MasterId, ReleaseId, Username,
        // Enums
        ArtistReleaseSort, CollectionSort, LabelReleaseSort, SortOrder,
        // Rate limiting
        RateLimit,
        // Responses
        Artist, ArtistReleasesPage, CollectionPage, CollectionValue, CommunityRating,
        FolderList, Label, LabelReleasesPage, Master, MasterVersionsPage, Pagination,
        Release, ReleaseStats, User, UserRating, WantlistPage,
    };
}
