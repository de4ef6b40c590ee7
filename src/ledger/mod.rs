//! Scan Ledger
//!
//! Append-only log of every scan attempt and its outcome. One physical
//! log holds all events; per-event views are filters over it.
//!
//! ```text
//! append ──► entries (insertion order, authoritative)
//!        └─► admitted index {(event, code)} for success entries
//!
//! entries_for(event) ──► newest first, for display
//! ```

mod log;

pub use log::ScanLedger;
