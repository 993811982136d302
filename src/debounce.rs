//! Trailing-edge debouncing for search input.
//!
//! [`Debouncer`] is a plain state machine driven by explicit [`Instant`]s: it
//! never sleeps or spawns anything. Each trigger replaces the single pending
//! task, so a burst of input collapses into one execution carrying the last
//! value, fired once the input has been quiet for the configured delay.

use std::time::{Duration, Instant};

/// Quiet period before a pending search fires.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value and the instant it becomes due.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending task with `value`, due `delay` after `now`.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending task, returning its value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending task is due; zero when overdue.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
