//! Rate-limit accounting derived from response headers.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header carrying the total request quota for the current window.
pub const HEADER_RATELIMIT: &str = "x-discogs-ratelimit";
/// Header carrying the remaining request quota.
pub const HEADER_RATELIMIT_REMAINING: &str = "x-discogs-ratelimit-remaining";
/// Header carrying the number of requests used so far.
pub const HEADER_RATELIMIT_USED: &str = "x-discogs-ratelimit-used";

/// Snapshot of the Discogs rate-limit counters.
///
/// Discogs reports its rolling-window quota on every response. The
/// snapshot reflects only the most recent response; it is stale between
/// requests and is never refreshed proactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Total requests allowed in the current window.
    pub limit: u32,
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Requests used in the current window.
    pub used: u32,
}

impl RateLimit {
    /// Parse the three `x-discogs-ratelimit*` headers.
    ///
    /// Absent or non-numeric headers parse as zero; the server is
    /// trusted here the way it trusts itself.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: parse_header(headers, HEADER_RATELIMIT),
            remaining: parse_header(headers, HEADER_RATELIMIT_REMAINING),
            used: parse_header(headers, HEADER_RATELIMIT_USED),
        }
    }

    /// Returns `true` if any rate-limit header was present at all.
    pub fn present_in(headers: &HeaderMap) -> bool {
        headers.contains_key(HEADER_RATELIMIT)
            || headers.contains_key(HEADER_RATELIMIT_REMAINING)
            || headers.contains_key(HEADER_RATELIMIT_USED)
    }
}

impl Default for RateLimit {
    /// Placeholder used before any real response has been seen.
    ///
    /// Discogs grants 25 requests per minute to unauthenticated
    /// clients; this is a guess, not server truth.
    fn default() -> Self {
        Self {
            limit: 25,
            remaining: 25,
            used: 0,
        }
    }
}

fn parse_header(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}
