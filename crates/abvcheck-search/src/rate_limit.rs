//! Process-wide guard admitting at most one search per minimum interval.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Rejects a search that arrives before `min_interval` has elapsed since the
/// last accepted one.
///
/// Constructed once at startup and shared by reference. The lock is held
/// only across the check-and-update, never across provider I/O.
#[derive(Debug)]
pub struct SearchRateLimiter {
    min_interval: Duration,
    last_accepted: Mutex<Option<Instant>>,
}

impl SearchRateLimiter {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: Mutex::new(None),
        }
    }

    /// Returns `true` and records the current time when the search may
    /// proceed; `false` when it must be reported as throttled.
    pub async fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now()).await
    }

    /// Same as [`Self::try_acquire`] with an explicit clock reading.
    pub async fn try_acquire_at(&self, now: Instant) -> bool {
        let mut last = self.last_accepted.lock().await;
        if let Some(previous) = *last {
            if now.saturating_duration_since(previous) < self.min_interval {
                return false;
            }
        }
        *last = Some(now);
        true
    }
}
