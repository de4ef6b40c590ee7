//! Event and ticket registries
//!
//! Both registries are plain in-memory collections owned by the gate
//! state. The ticket registry keeps its code index in step with every
//! insertion.

mod events;
mod issuance;
mod tickets;

pub use events::{seed_events, EventRegistry, DEFAULT_ACTIVE_EVENT};
pub use issuance::{demo_ticket, issue_tickets, seat_label, ticket_code};
pub use tickets::TicketRegistry;
