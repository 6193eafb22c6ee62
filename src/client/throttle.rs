//! Pre-call throttle check against the cached rate-limit snapshot.

use std::time::Duration;

use super::ClientInner;

/// Remaining-quota floor at which the cooldown engages.
pub const QUOTA_FLOOR: u32 = 2;
/// Fixed cooldown once the floor is reached; Discogs quotas roll over
/// on a one-minute window.
pub const COOLDOWN: Duration = Duration::from_secs(60);
/// Short settle pause after the cooldown.
pub const SETTLE: Duration = Duration::from_secs(1);

impl ClientInner {
    /// Sleep for the fixed cooldown when the cached remaining quota is
    /// at or below [`QUOTA_FLOOR`].
    ///
    /// The snapshot is NOT refreshed after the wait: the cached
    /// `remaining` still holds its pre-sleep value until the next
    /// response arrives, so back-to-back throttled calls can each pay
    /// the full cooldown. Refreshing would itself cost a request
    /// against the quota, so the staleness is accepted.
    pub(crate) async fn wait_for_quota(&self) {
        let snapshot = self.rate_limit();
        tracing::debug!(remaining = snapshot.remaining, "quota check");

        if snapshot.remaining <= QUOTA_FLOOR {
            tracing::warn!(
                remaining = snapshot.remaining,
                floor = QUOTA_FLOOR,
                cooldown_secs = COOLDOWN.as_secs(),
                "rate limit nearly exhausted, cooling down"
            );
            tokio::time::sleep(COOLDOWN).await;
            tracing::debug!("cooldown elapsed, settling");
            tokio::time::sleep(SETTLE).await;
        }
    }
}
