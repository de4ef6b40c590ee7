//! Persistence
//!
//! State lives in a key-value blob store, one JSON blob per collection.
//! It is loaded once at startup and each collection is rewritten whole
//! after every change.
//!
//! ```text
//! <data_dir>/events.json        [Event, ...]
//! <data_dir>/tickets.json       [Ticket, ...]
//! <data_dir>/scans.json         [ScanEntry, ...]   insertion order
//! <data_dir>/active_event.json  "ev-1"
//! ```

mod blob;
mod state;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use state::{
    load_state, save_active_event, save_events, save_scans, save_tickets, PersistedState,
    KEY_ACTIVE_EVENT, KEY_EVENTS, KEY_SCANS, KEY_TICKETS,
};
