//! Sliding-window rate limiting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// The rolling window queries are counted over.
const WINDOW: Duration = Duration::from_secs(60);

/// Bounds operations per rolling minute.
///
/// Keeps the timestamps of admitted operations and purges expired ones lazily
/// on each check; after any call, at most `max_queries_per_minute` timestamps
/// fall inside the window. A threshold of zero rejects every call.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Operations admitted per rolling minute.
    max_queries_per_minute: u32,
    /// Timestamps of admitted operations, oldest first.
    window: VecDeque<Instant>,
}

impl RateLimiter {
    /// Creates a limiter with an empty window.
    #[must_use]
    pub fn new(max_queries_per_minute: u32) -> Self {
        Self {
            max_queries_per_minute,
            window: VecDeque::new(),
        }
    }

    /// Admits or rejects one operation.
    ///
    /// Purges timestamps older than one minute, then admits and records the
    /// operation iff the remaining count is below the threshold. Rejected
    /// operations are not recorded and do not extend anyone's wait.
    pub fn is_query_allowed(&mut self) -> bool {
        self.is_query_allowed_at(Instant::now())
    }

    /// [`is_query_allowed`](Self::is_query_allowed) with an explicit clock
    /// sample.
    pub fn is_query_allowed_at(&mut self, now: Instant) -> bool {
        while self
            .window
            .front()
            .is_some_and(|&t| now.duration_since(t) >= WINDOW)
        {
            self.window.pop_front();
        }

        if (self.window.len() as u64) < u64::from(self.max_queries_per_minute) {
            self.window.push_back(now);
            true
        } else {
            tracing::debug!(
                target: "lumen::security",
                in_window = self.window.len(),
                max = self.max_queries_per_minute,
                "query rejected by rate limiter"
            );
            false
        }
    }

    /// Drops every recorded timestamp.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Operations recorded in the window as of the last check.
    #[must_use]
    pub fn recent_count(&self) -> usize {
        self.window.len()
    }

    /// Configured per-minute threshold.
    #[must_use]
    pub const fn max_queries_per_minute(&self) -> u32 {
        self.max_queries_per_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_threshold_then_rejects() {
        let mut limiter = RateLimiter::new(5);
        let now = Instant::now();

        for i in 0..5 {
            assert!(limiter.is_query_allowed_at(now + Duration::from_secs(i)));
        }
        assert!(!limiter.is_query_allowed_at(now + Duration::from_secs(5)));
        assert_eq!(limiter.recent_count(), 5);
    }

    #[test]
    fn rejected_queries_are_not_recorded() {
        let mut limiter = RateLimiter::new(1);
        let now = Instant::now();

        assert!(limiter.is_query_allowed_at(now));
        assert!(!limiter.is_query_allowed_at(now));
        assert!(!limiter.is_query_allowed_at(now));
        assert_eq!(limiter.recent_count(), 1);
    }

    #[test]
    fn window_expiry_frees_capacity() {
        let mut limiter = RateLimiter::new(2);
        let now = Instant::now();

        assert!(limiter.is_query_allowed_at(now));
        assert!(limiter.is_query_allowed_at(now + Duration::from_secs(30)));
        assert!(!limiter.is_query_allowed_at(now + Duration::from_secs(59)));

        // First timestamp ages out at now + 60s.
        assert!(limiter.is_query_allowed_at(now + Duration::from_secs(60)));
        assert_eq!(limiter.recent_count(), 2);
    }

    #[test]
    fn reset_clears_the_window() {
        let mut limiter = RateLimiter::new(1);
        let now = Instant::now();

        assert!(limiter.is_query_allowed_at(now));
        assert!(!limiter.is_query_allowed_at(now));

        limiter.reset();
        assert_eq!(limiter.recent_count(), 0);
        assert!(limiter.is_query_allowed_at(now));
    }

    #[test]
    fn zero_threshold_rejects_everything() {
        let mut limiter = RateLimiter::new(0);
        let now = Instant::now();

        assert!(!limiter.is_query_allowed_at(now));
        assert!(!limiter.is_query_allowed_at(now + Duration::from_secs(3600)));
        assert_eq!(limiter.recent_count(), 0);
    }
}
