//! Lockout window between accepted scans

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::warn;

use crate::utils::Clock;

/// Suppresses scans while the previous outcome is still on screen
pub struct ScanDebouncer {
    clock: Arc<dyn Clock>,
    lockout: Duration,
    last_accepted: Mutex<Option<DateTime<Utc>>>,
}

impl ScanDebouncer {
    pub fn new(clock: Arc<dyn Clock>, lockout_ms: u64) -> Self {
        let lockout = Duration::milliseconds(i64::try_from(lockout_ms).unwrap_or(i64::MAX));
        Self {
            clock,
            lockout,
            last_accepted: Mutex::new(None),
        }
    }

    /// Claim the station for one scan
    ///
    /// Returns false while inside the lockout of the last accepted scan.
    /// A clock that went backwards since then ends the lockout.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now();
        let mut last = self.last_accepted.lock();

        if let Some(previous) = *last {
            let elapsed = now - previous;
            if elapsed >= Duration::zero() && elapsed < self.lockout {
                warn!(elapsed_ms = elapsed.num_milliseconds(), "Scan suppressed during lockout");
                return false;
            }
        }

        *last = Some(now);
        true
    }

    /// Drop the current lockout
    pub fn release(&self) {
        *self.last_accepted.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;
    use chrono::TimeZone;

    #[test]
    fn test_lockout_boundary() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let debouncer = ScanDebouncer::new(clock.clone(), 1000);

        assert!(debouncer.try_acquire());
        clock.advance(Duration::milliseconds(999));
        assert!(!debouncer.try_acquire());
        clock.advance(Duration::milliseconds(1));
        assert!(debouncer.try_acquire());
    }

    #[test]
    fn test_suppressed_scan_does_not_extend_lockout() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let debouncer = ScanDebouncer::new(clock.clone(), 1000);

        assert!(debouncer.try_acquire());
        clock.advance(Duration::milliseconds(600));
        assert!(!debouncer.try_acquire());
        clock.advance(Duration::milliseconds(400));
        assert!(debouncer.try_acquire());
    }

    #[test]
    fn test_clock_stepping_back_ends_lockout() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let debouncer = ScanDebouncer::new(clock.clone(), 3500);

        assert!(debouncer.try_acquire());
        clock.advance(Duration::hours(-1));
        clock.advance(Duration::seconds(10));
        assert!(debouncer.try_acquire());

        // Lockout runs again from the new reading
        clock.advance(Duration::milliseconds(100));
        assert!(!debouncer.try_acquire());
    }

    #[test]
    fn test_release() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let debouncer = ScanDebouncer::new(clock, 3500);

        assert!(debouncer.try_acquire());
        assert!(!debouncer.try_acquire());
        debouncer.release();
        assert!(debouncer.try_acquire());
    }
}
