//! Loading and saving gate state
//!
//! Loading never fails: a missing or unreadable blob falls back to its
//! default (seed events, no tickets, empty ledger) so the door keeps
//! working. Duplicate detection across that restart is lost.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::GateResult;
use crate::registry::{seed_events, DEFAULT_ACTIVE_EVENT};
use crate::types::{Event, ScanEntry, Ticket};

use super::BlobStore;

pub const KEY_EVENTS: &str = "events";
pub const KEY_TICKETS: &str = "tickets";
pub const KEY_SCANS: &str = "scans";
pub const KEY_ACTIVE_EVENT: &str = "active_event";

/// Raw collections as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    pub events: Vec<Event>,
    pub tickets: Vec<Ticket>,
    pub scans: Vec<ScanEntry>,
    pub active_event_id: String,
    /// False when the ticket blob was absent or unreadable
    pub tickets_loaded: bool,
}

/// Read one blob, `None` on absence or any failure
fn load_blob<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Corrupt blob, using default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "Could not read blob, using default");
            None
        }
    }
}

/// Load everything, substituting defaults for missing or bad blobs
pub fn load_state(store: &dyn BlobStore) -> PersistedState {
    let events = load_blob::<Vec<Event>>(store, KEY_EVENTS).unwrap_or_else(seed_events);
    let tickets = load_blob::<Vec<Ticket>>(store, KEY_TICKETS);
    let tickets_loaded = tickets.is_some();
    let scans = load_blob::<Vec<ScanEntry>>(store, KEY_SCANS).unwrap_or_default();
    let active_event_id = load_blob::<String>(store, KEY_ACTIVE_EVENT)
        .unwrap_or_else(|| DEFAULT_ACTIVE_EVENT.to_string());

    let state = PersistedState {
        events,
        tickets: tickets.unwrap_or_default(),
        scans,
        active_event_id,
        tickets_loaded,
    };

    info!(
        events = state.events.len(),
        tickets = state.tickets.len(),
        scans = state.scans.len(),
        active_event = %state.active_event_id,
        "State loaded"
    );

    state
}

fn save_blob<T: Serialize + ?Sized>(store: &dyn BlobStore, key: &str, value: &T) -> GateResult<()> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}

pub fn save_events(store: &dyn BlobStore, events: &[Event]) -> GateResult<()> {
    save_blob(store, KEY_EVENTS, events)
}

pub fn save_tickets(store: &dyn BlobStore, tickets: &[Ticket]) -> GateResult<()> {
    save_blob(store, KEY_TICKETS, tickets)
}

pub fn save_scans(store: &dyn BlobStore, scans: &[ScanEntry]) -> GateResult<()> {
    save_blob(store, KEY_SCANS, scans)
}

pub fn save_active_event(store: &dyn BlobStore, event_id: &str) -> GateResult<()> {
    save_blob(store, KEY_ACTIVE_EVENT, event_id)
}
