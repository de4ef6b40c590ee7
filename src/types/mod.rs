//! Data types for the gatepass access-control engine
//!
//! This module contains the records shared by the registries, the ledger
//! and the station interface.

mod event;
mod scan;
mod stats;
mod ticket;

pub use event::{Event, EventStatus, NewEvent};
pub use scan::{Outcome, OutcomeKind, ScanEntry, ScanVerdict};
pub use stats::{SecurityStats, StatsBreakdown};
pub use ticket::{Ticket, TicketStatus, TicketTier};
