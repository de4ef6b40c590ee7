//! Statistics Aggregator
//!
//! Counters are recomputed from the ledger on every call; nothing is
//! cached and nothing is written.

use crate::ledger::ScanLedger;
use crate::registry::TicketRegistry;
use crate::types::{Event, SecurityStats};

/// Counters for `event` derived from the ledger and ticket registry
pub fn compute_stats(event: &Event, tickets: &TicketRegistry, ledger: &ScanLedger) -> SecurityStats {
    let mut stats = SecurityStats {
        total_expected: event.capacity,
        ..SecurityStats::default()
    };

    for entry in ledger.entries_for(&event.id) {
        if entry.is_success() {
            stats.scanned_count += 1;
            if tickets.find_by_code(&entry.code).is_some_and(|t| t.is_vip()) {
                stats.vip_count += 1;
            }
        } else {
            stats.anomalies += 1;
        }
    }

    stats
}
