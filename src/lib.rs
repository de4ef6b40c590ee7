//! Gatepass
//!
//! Ticket validation and scan ledger engine for live event access
//! control. A single operator scans codes at one door; each scan is
//! decided against the active event and recorded in an append-only
//! ledger that statistics are derived from.
//!
//! # Modules
//!
//! - `types`: Events, tickets, ledger entries, outcomes, statistics
//! - `registry`: Event and ticket registries, bulk ticket issuance
//! - `ledger`: Append-only scan ledger with an admission index
//! - `engine`: Validation engine and statistics aggregator
//! - `gate`: Facade owning state, persistence and operations
//! - `station`: Capture-side input handling and scan lockout
//! - `storage`: Blob store backends and state load/save
//! - `validation`: Event form and scan code checks
//! - `protocol` / `server` / `tools`: JSON-RPC station interface
//! - `config`, `error`, `utils`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gatepass::{Gate, GateConfig, NewEvent};
//!
//! let gate = Arc::new(Gate::open(GateConfig::from_env()));
//! let created = gate
//!     .create_event(NewEvent::new("Rock Night", "2025-06-21", "Zenith", 500, "Rock"), 500)
//!     .unwrap();
//! gate.select_event(&created.event.id).unwrap();
//!
//! let outcome = gate.scan("TKT-EV-1A2B3C4D-001").unwrap();
//! println!("{} {:?}", outcome.message, outcome.holder_name);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod gate;
pub mod ledger;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod station;
pub mod storage;
pub mod tools;
pub mod types;
pub mod utils;
pub mod validation;

pub use config::GateConfig;
pub use error::{GateError, GateResult};
pub use gate::{EventCreated, Gate};
pub use ledger::ScanLedger;
pub use server::StationServer;
pub use station::{ScanStation, StationResult};
pub use types::{
    Event, EventStatus, NewEvent, Outcome, OutcomeKind, ScanEntry, ScanVerdict, SecurityStats,
    Ticket, TicketStatus, TicketTier,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
