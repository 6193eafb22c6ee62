//! Data models for the Discogs API.
//!
//! This module contains the strongly-typed data structures used to
//! interact with the Discogs API. Models are organized by domain:
//!
//! - [`primitives`] - Core types like `Username`, `ReleaseId`, etc.
//! - [`enums`] - Sort keys and sort orders for paged endpoints
//! - [`rate_limit`] - The rate-limit snapshot and its header parsing
//! - [`common`] - Pagination and shared response fragments
//! - [`user`] - User profile models
//! - [`collection`] - Collection, folder, and wantlist models
//! - [`release`] - Release, master, and rating models
//! - [`artist`] - Artist models
//! - [`label`] - Label models

pub mod primitives;
pub mod enums;
pub mod rate_limit;
pub mod common;
pub mod user;
pub mod collection;
pub mod release;
pub mod artist;
pub mod label;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use rate_limit::*;
pub use common::*;
pub use user::*;
pub use collection::*;
pub use release::*;
pub use artist::*;
pub use label::*;
