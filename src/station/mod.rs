//! Scanning station
//!
//! The capture side of the door: takes raw codes from the camera or the
//! keyboard, drops blank input, enforces the lockout window and hands
//! the rest to the gate.

mod debounce;

use std::sync::Arc;

use serde::Serialize;

use crate::error::GateResult;
use crate::gate::Gate;
use crate::types::Outcome;
use crate::validation::normalize_code;

pub use debounce::ScanDebouncer;

/// What happened to a submitted code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StationResult {
    /// The gate decided the scan
    Decided { outcome: Outcome },
    /// Arrived inside the lockout window; nothing recorded
    Suppressed,
}

/// Single scanning station in front of a gate
pub struct ScanStation {
    gate: Arc<Gate>,
    debouncer: ScanDebouncer,
}

impl ScanStation {
    /// Station using the gate's clock and configured lockout
    pub fn new(gate: Arc<Gate>) -> Self {
        let lockout_ms = gate.config().scan_lockout_ms;
        let debouncer = ScanDebouncer::new(gate.clock.clone(), lockout_ms);
        Self { gate, debouncer }
    }

    pub fn gate(&self) -> &Arc<Gate> {
        &self.gate
    }

    /// Submit a captured code
    ///
    /// Only a decided scan starts the lockout.
    pub fn submit(&self, raw_code: &str) -> GateResult<StationResult> {
        let code = normalize_code(raw_code)?;

        if !self.debouncer.try_acquire() {
            return Ok(StationResult::Suppressed);
        }

        match self.gate.scan(code) {
            Ok(outcome) => Ok(StationResult::Decided { outcome }),
            Err(e) => {
                self.debouncer.release();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;
    use crate::error::GateError;
    use crate::storage::MemoryBlobStore;
    use crate::utils::{ManualClock, SequentialIds};
    use chrono::{Duration, TimeZone, Utc};

    fn station(lockout_ms: u64) -> (ScanStation, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let gate = Gate::with_parts(
            GateConfig::default().with_scan_lockout_ms(lockout_ms),
            Arc::new(MemoryBlobStore::new()),
            clock.clone(),
            Arc::new(SequentialIds::new()),
        );
        (ScanStation::new(Arc::new(gate)), clock)
    }

    #[test]
    fn test_rapid_rescan_is_suppressed() {
        let (station, clock) = station(3500);

        assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
        clock.advance(Duration::milliseconds(500));
        assert_eq!(station.submit("A").unwrap(), StationResult::Suppressed);
        assert_eq!(station.gate().ledger_snapshot().len(), 1);

        clock.advance(Duration::milliseconds(3000));
        assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
        assert_eq!(station.gate().ledger_snapshot().len(), 2);
    }

    #[test]
    fn test_blank_input_does_not_start_lockout() {
        let (station, _clock) = station(3500);

        assert!(matches!(station.submit("  "), Err(GateError::EmptyCode)));
        assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
    }

    #[test]
    fn test_zero_lockout() {
        let (station, _clock) = station(0);
        for _ in 0..3 {
            assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
        }
    }

    #[test]
    fn test_failed_scan_does_not_start_lockout() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap(),
        ));
        let store = MemoryBlobStore::new().with_blob("events", "[]");
        let gate = Gate::with_parts(
            GateConfig::default().with_scan_lockout_ms(3500),
            Arc::new(store),
            clock.clone(),
            Arc::new(SequentialIds::new()),
        );
        let station = ScanStation::new(Arc::new(gate));

        assert!(matches!(station.submit("A"), Err(GateError::NoActiveEvent)));

        station
            .gate()
            .create_event(
                crate::types::NewEvent::new("Late", "2025-01-01", "", 10, "Concert"),
                1,
            )
            .unwrap();
        assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
    }

    #[test]
    fn test_clock_stepping_back_does_not_block_door() {
        let (station, clock) = station(3500);

        assert!(matches!(station.submit("A").unwrap(), StationResult::Decided { .. }));
        clock.advance(Duration::hours(-1));
        clock.advance(Duration::seconds(10));
        assert!(matches!(station.submit("B").unwrap(), StationResult::Decided { .. }));
    }
}
