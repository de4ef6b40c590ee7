//! Decision core
//!
//! - `validate`: decides one scan and records it in the ledger
//! - `compute_stats`: derives the active event's counters
//!
//! Both take their state explicitly; nothing here reads globals.

mod stats;
mod validate;

pub use stats::compute_stats;
pub use validate::{validate, ScanContext};
