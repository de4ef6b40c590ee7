//! Per-event security statistics

use serde::{Deserialize, Serialize};

/// Derived counters for the active event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SecurityStats {
    #[serde(rename = "totalExpected")]
    pub total_expected: u32,
    #[serde(rename = "scannedCount")]
    pub scanned_count: usize,
    #[serde(rename = "vipCount")]
    pub vip_count: usize,
    pub anomalies: usize,
}

/// Admissions split for the dashboard chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatsBreakdown {
    pub vip: usize,
    pub standard: usize,
    pub errors: usize,
}

impl SecurityStats {
    /// Admitted over capacity, in percent
    ///
    /// Not clamped: above 100 means overbooking.
    pub fn occupancy_percent(&self) -> f64 {
        if self.total_expected == 0 {
            return 0.0;
        }
        self.scanned_count as f64 / self.total_expected as f64 * 100.0
    }

    pub fn standard_count(&self) -> usize {
        self.scanned_count.saturating_sub(self.vip_count)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.scanned_count > self.total_expected as usize
    }

    pub fn breakdown(&self) -> StatsBreakdown {
        StatsBreakdown {
            vip: self.vip_count,
            standard: self.standard_count(),
            errors: self.anomalies,
        }
    }
}
