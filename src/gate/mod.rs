//! Gate - access-control facade
//!
//! Owns the registries and the scan ledger behind one lock, loads them
//! from the blob store at startup and writes each changed collection back
//! whole. Every operation runs to completion under the lock, so one scan
//! finishes before the next is looked at.

mod events;
mod query;
mod scan;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

pub use events::EventCreated;

use crate::config::GateConfig;
use crate::error::GateResult;
use crate::ledger::ScanLedger;
use crate::registry::{demo_ticket, EventRegistry, TicketRegistry};
use crate::storage::{load_state, save_tickets, BlobStore, FileBlobStore, MemoryBlobStore};
use crate::types::{Event, NewEvent, Outcome, ScanEntry, SecurityStats, Ticket};
use crate::utils::{Clock, IdSource, RandomIds, SystemClock};

/// In-memory state guarded by the gate lock
#[derive(Debug)]
pub(crate) struct GateState {
    pub(crate) events: EventRegistry,
    pub(crate) tickets: TicketRegistry,
    pub(crate) ledger: ScanLedger,
}

/// Access-control gate for one scanning station
pub struct Gate {
    pub(crate) state: Mutex<GateState>,
    pub(crate) store: Arc<dyn BlobStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) ids: Arc<dyn IdSource>,
    pub(crate) config: GateConfig,
}

impl Gate {
    /// Open a gate on the file store in `config.data_dir`
    ///
    /// If the data directory cannot be opened the gate runs on an
    /// in-memory store so scanning stays available.
    pub fn open(config: GateConfig) -> Self {
        let store: Arc<dyn BlobStore> = match FileBlobStore::open(&config.data_dir) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!(
                    dir = %config.data_dir.display(),
                    error = %e,
                    "Data directory unavailable, state will not survive restart"
                );
                Arc::new(MemoryBlobStore::new())
            }
        };

        Self::with_parts(config, store, Arc::new(SystemClock), Arc::new(RandomIds))
    }

    /// Assemble a gate from explicit collaborators and load its state
    pub fn with_parts(
        config: GateConfig,
        store: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        let persisted = load_state(store.as_ref());

        let mut tickets = TicketRegistry::from_tickets(persisted.tickets);
        let seed_demo = config.demo_ticket && !persisted.tickets_loaded;
        if seed_demo {
            tickets.extend(vec![demo_ticket()]);
            info!("Seeded demo ticket TKT-VIP-001");
        }

        let state = GateState {
            events: EventRegistry::new(persisted.events, persisted.active_event_id),
            tickets,
            ledger: ScanLedger::from_entries(persisted.scans),
        };

        let gate = Self {
            state: Mutex::new(state),
            store,
            clock,
            ids,
            config,
        };

        if seed_demo {
            let state = gate.state.lock();
            if let Err(e) = save_tickets(gate.store.as_ref(), state.tickets.all()) {
                warn!(error = %e, "Could not persist demo ticket");
            }
        }

        gate
    }

    /// Gate on a fresh in-memory store with the real clock
    pub fn in_memory(config: GateConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(MemoryBlobStore::new()),
            Arc::new(SystemClock),
            Arc::new(RandomIds),
        )
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}

// Operations live in submodules
impl Gate {
    // Scanning (from scan.rs)
    pub fn scan(&self, raw_code: &str) -> GateResult<Outcome> {
        scan::scan(self, raw_code)
    }

    // Event management (from events.rs)
    pub fn create_event(&self, new_event: NewEvent, ticket_count: u32) -> GateResult<EventCreated> {
        events::create_event(self, new_event, ticket_count)
    }

    pub fn select_event(&self, event_id: &str) -> GateResult<Event> {
        events::select_event(self, event_id)
    }

    // Read-only views (from query.rs)
    pub fn events(&self) -> Vec<Event> {
        query::events(self)
    }

    pub fn active_event(&self) -> GateResult<Event> {
        query::active_event(self)
    }

    pub fn tickets_for_event(&self, event_id: &str) -> GateResult<Vec<Ticket>> {
        query::tickets_for_event(self, event_id)
    }

    pub fn stats(&self) -> GateResult<SecurityStats> {
        query::stats(self)
    }

    pub fn stats_for(&self, event_id: &str) -> GateResult<SecurityStats> {
        query::stats_for(self, event_id)
    }

    pub fn history(&self, query: Option<&str>, limit: Option<usize>) -> GateResult<Vec<ScanEntry>> {
        query::history(self, query, limit)
    }

    pub fn recent_anomalies(&self, count: usize) -> GateResult<Vec<ScanEntry>> {
        query::recent_anomalies(self, count)
    }

    pub fn ledger_snapshot(&self) -> Vec<ScanEntry> {
        query::ledger_snapshot(self)
    }
}
