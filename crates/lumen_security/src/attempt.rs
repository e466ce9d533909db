//! Consecutive-failure tracking with timed lockout.

use std::time::{Duration, Instant};

/// Tracks consecutive failed attempts and locks out after a threshold.
///
/// Two states: **open** (attempts are counted) and **locked** (attempts are
/// rejected until the lockout window elapses or is cleared). A threshold of
/// zero means unlimited mode: attempts are still counted but lockout never
/// triggers.
///
/// One tracker guards one logical action (e.g. one OTP widget's verification).
/// Mutating operations take `&mut self`; share across threads only behind
/// external synchronization.
#[derive(Debug, Clone)]
pub struct AttemptTracker {
    /// Failures before lockout. 0 = unlimited.
    max_attempts: u32,
    /// How long a triggered lockout lasts.
    lockout_duration: Duration,
    /// Consecutive failures so far.
    attempts: u32,
    /// When the current lockout started, if any.
    locked_at: Option<Instant>,
}

impl AttemptTracker {
    /// Creates an open tracker with zero recorded attempts.
    #[must_use]
    pub const fn new(max_attempts: u32, lockout_duration: Duration) -> Self {
        Self {
            max_attempts,
            lockout_duration,
            attempts: 0,
            locked_at: None,
        }
    }

    /// Records one attempt. Returns whether the attempt is admitted.
    ///
    /// Rejected (`false`) when currently locked, or when this attempt is the
    /// one that reaches the threshold and triggers the lockout. An expired
    /// lockout is dissolved first: the tracker reopens with zero attempts and
    /// this attempt counts as the first of the new run.
    pub fn record_attempt(&mut self) -> bool {
        self.record_attempt_at(Instant::now())
    }

    /// [`record_attempt`](Self::record_attempt) with an explicit clock sample.
    pub fn record_attempt_at(&mut self, now: Instant) -> bool {
        if let Some(started) = self.locked_at {
            if now.duration_since(started) < self.lockout_duration {
                tracing::debug!(
                    target: "lumen::security",
                    remaining_secs = self.lockout_duration.saturating_sub(now.duration_since(started)).as_secs(),
                    "attempt rejected during lockout"
                );
                return false;
            }
            // Lockout expired: reopen and start a fresh run.
            self.locked_at = None;
            self.attempts = 0;
        }

        self.attempts = self.attempts.saturating_add(1);
        if self.max_attempts > 0 && self.attempts >= self.max_attempts {
            self.locked_at = Some(now);
            tracing::warn!(
                target: "lumen::security",
                attempts = self.attempts,
                lockout_secs = self.lockout_duration.as_secs(),
                "attempt threshold reached, locking out"
            );
            return false;
        }
        true
    }

    /// Whether the tracker is currently locked.
    #[must_use]
    pub fn is_locked_out(&self) -> bool {
        self.is_locked_out_at(Instant::now())
    }

    /// [`is_locked_out`](Self::is_locked_out) with an explicit clock sample.
    #[must_use]
    pub fn is_locked_out_at(&self, now: Instant) -> bool {
        self.locked_at
            .is_some_and(|started| now.duration_since(started) < self.lockout_duration)
    }

    /// Time left on the current lockout; zero when not locked.
    #[must_use]
    pub fn remaining_lockout(&self) -> Duration {
        self.remaining_lockout_at(Instant::now())
    }

    /// [`remaining_lockout`](Self::remaining_lockout) with an explicit clock
    /// sample.
    #[must_use]
    pub fn remaining_lockout_at(&self, now: Instant) -> Duration {
        self.locked_at.map_or(Duration::ZERO, |started| {
            self.lockout_duration
                .saturating_sub(now.duration_since(started))
        })
    }

    /// Full reset: reopens the tracker and zeroes the attempt counter.
    pub fn reset_attempts(&mut self) {
        self.attempts = 0;
        self.locked_at = None;
    }

    /// Reopens the tracker without touching the attempt counter.
    ///
    /// The counter keeps its value, so if it already sits at the threshold the
    /// very next failed attempt re-locks immediately. Callers wanting a clean
    /// slate should use [`reset_attempts`](Self::reset_attempts) instead.
    pub fn clear_lockout(&mut self) {
        self.locked_at = None;
    }

    /// Consecutive failures recorded so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Configured threshold. 0 = unlimited.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Configured lockout window.
    #[must_use]
    pub const fn lockout_duration(&self) -> Duration {
        self.lockout_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKOUT: Duration = Duration::from_secs(300);

    #[test]
    fn third_attempt_of_three_locks_out() {
        let mut tracker = AttemptTracker::new(3, LOCKOUT);
        let now = Instant::now();

        assert!(tracker.record_attempt_at(now));
        assert_eq!(tracker.attempts(), 1);
        assert!(tracker.record_attempt_at(now));
        assert_eq!(tracker.attempts(), 2);

        assert!(!tracker.record_attempt_at(now));
        assert!(tracker.is_locked_out_at(now));
        assert_eq!(tracker.attempts(), 3);
    }

    #[test]
    fn locked_tracker_rejects_without_counting() {
        let mut tracker = AttemptTracker::new(2, LOCKOUT);
        let now = Instant::now();

        tracker.record_attempt_at(now);
        tracker.record_attempt_at(now);
        assert_eq!(tracker.attempts(), 2);

        assert!(!tracker.record_attempt_at(now + Duration::from_secs(10)));
        assert_eq!(tracker.attempts(), 2);
    }

    #[test]
    fn unlimited_mode_never_locks() {
        let mut tracker = AttemptTracker::new(0, LOCKOUT);
        let now = Instant::now();

        for i in 0..100 {
            assert!(tracker.record_attempt_at(now + Duration::from_secs(i)));
        }
        assert!(!tracker.is_locked_out_at(now + Duration::from_secs(100)));
        assert_eq!(tracker.attempts(), 100);
    }

    #[test]
    fn expired_lockout_reopens_with_fresh_run() {
        let mut tracker = AttemptTracker::new(2, LOCKOUT);
        let now = Instant::now();

        tracker.record_attempt_at(now);
        tracker.record_attempt_at(now); // locks
        assert!(tracker.is_locked_out_at(now));

        let later = now + LOCKOUT;
        assert!(!tracker.is_locked_out_at(later));
        assert!(tracker.record_attempt_at(later));
        assert_eq!(tracker.attempts(), 1);
    }

    #[test]
    fn remaining_lockout_counts_down_and_floors_at_zero() {
        let mut tracker = AttemptTracker::new(1, LOCKOUT);
        let now = Instant::now();

        assert_eq!(tracker.remaining_lockout_at(now), Duration::ZERO);

        tracker.record_attempt_at(now); // locks immediately
        assert_eq!(tracker.remaining_lockout_at(now), LOCKOUT);
        assert_eq!(
            tracker.remaining_lockout_at(now + Duration::from_secs(100)),
            Duration::from_secs(200),
        );
        assert_eq!(
            tracker.remaining_lockout_at(now + LOCKOUT + Duration::from_secs(1)),
            Duration::ZERO,
        );
    }

    #[test]
    fn reset_attempts_is_a_full_reset() {
        let mut tracker = AttemptTracker::new(2, LOCKOUT);
        let now = Instant::now();

        tracker.record_attempt_at(now);
        tracker.record_attempt_at(now); // locks
        tracker.reset_attempts();

        assert!(!tracker.is_locked_out_at(now));
        assert_eq!(tracker.attempts(), 0);
        assert!(tracker.record_attempt_at(now));
    }

    #[test]
    fn clear_lockout_keeps_the_counter() {
        let mut tracker = AttemptTracker::new(2, LOCKOUT);
        let now = Instant::now();

        tracker.record_attempt_at(now);
        tracker.record_attempt_at(now); // locks at attempts == 2
        tracker.clear_lockout();

        assert!(!tracker.is_locked_out_at(now));
        assert_eq!(tracker.attempts(), 2);

        // Counter still at threshold: the next failure re-locks at once.
        assert!(!tracker.record_attempt_at(now));
        assert!(tracker.is_locked_out_at(now));
    }
}
