//! Quiet-period debouncing for continuous scrolling.
//!
//! Every continuous-input notification restarts the quiet period; the snap
//! fires once the period elapses with no further notification.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use dialpick::picker::SnapScheduler;
//!
//! let mut scheduler = SnapScheduler::new(Duration::from_millis(150));
//! let start = Instant::now();
//!
//! scheduler.arm(start);
//! assert!(!scheduler.fire_if_due(start + Duration::from_millis(100)));
//! assert!(scheduler.fire_if_due(start + Duration::from_millis(150)));
//! assert!(!scheduler.fire_if_due(start + Duration::from_millis(300)));
//! ```

use std::time::{Duration, Instant};

/// Quiet period used when the host does not configure one.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// A single owned, cancelable debounce deadline.
///
/// The scheduler holds no timer of its own: hosts wait on [`deadline`] and
/// call [`fire_if_due`] when it passes.
///
/// [`deadline`]: SnapScheduler::deadline
/// [`fire_if_due`]: SnapScheduler::fire_if_due
#[derive(Debug, Clone)]
pub struct SnapScheduler {
    /// Time without notifications before the snap fires
    quiet_period: Duration,
    /// When the armed snap is due
    deadline: Option<Instant>,
}

impl Default for SnapScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl SnapScheduler {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Arm the snap, superseding any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the armed deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_after_quiet_period() {
        let mut scheduler = SnapScheduler::new(ms(150));
        let start = Instant::now();

        assert!(!scheduler.fire_if_due(start));

        scheduler.arm(start);
        assert!(scheduler.is_armed());
        assert!(!scheduler.fire_if_due(start + ms(149)));
        assert!(scheduler.fire_if_due(start + ms(150)));
        assert!(!scheduler.is_armed());
        assert!(!scheduler.fire_if_due(start + ms(500)));
    }

    #[test]
    fn test_rearm_restarts_quiet_period() {
        let mut scheduler = SnapScheduler::new(ms(150));
        let start = Instant::now();

        scheduler.arm(start);
        scheduler.arm(start + ms(100));
        assert_eq!(scheduler.deadline(), Some(start + ms(250)));

        // The first deadline has been superseded
        assert!(!scheduler.fire_if_due(start + ms(200)));
        assert!(scheduler.fire_if_due(start + ms(250)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = SnapScheduler::default();
        let start = Instant::now();

        scheduler.arm(start);
        scheduler.cancel();
        assert!(scheduler.deadline().is_none());
        assert!(!scheduler.fire_if_due(start + ms(1_000)));
    }
}
