//! HTTP client and service layer for the Discogs API.
//!
//! This module provides the main entry point [`DiscogsClient`] for
//! interacting with the Discogs API.
//!
//! # Example
//!
//! ```no_run
//! use discogs_rs::{DiscogsClient, ClientConfig, Credentials};
//!
//! # async fn example() -> discogs_rs::Result<()> {
//! let client = DiscogsClient::with_config(
//!     ClientConfig::default()
//!         .with_credentials(Credentials::token("abc"))
//!         .with_username("rodneyfool"),
//! )?;
//!
//! let profile = client.users().profile().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod throttle;

pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_PER_PAGE, DEFAULT_PORT};
pub use http::DiscogsClient;
pub(crate) use http::ClientInner;
