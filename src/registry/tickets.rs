//! Ticket registry with a code index

use std::collections::HashMap;

use tracing::warn;

use crate::types::Ticket;

/// All tickets across all events, indexed by scan code
#[derive(Debug, Clone, Default)]
pub struct TicketRegistry {
    tickets: Vec<Ticket>,
    /// code → position in `tickets`
    code_index: HashMap<String, usize>,
}

impl TicketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from persisted tickets
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        let mut registry = Self::new();
        registry.extend(tickets);
        registry
    }

    /// Add tickets, indexing each code
    ///
    /// A ticket whose code is already registered is skipped. Returns the
    /// number of tickets added.
    pub fn extend(&mut self, tickets: Vec<Ticket>) -> usize {
        let mut added = 0;
        for ticket in tickets {
            if self.code_index.contains_key(&ticket.code) {
                warn!(code = %ticket.code, ticket_id = %ticket.id, "Skipping ticket with duplicate code");
                continue;
            }
            self.code_index.insert(ticket.code.clone(), self.tickets.len());
            self.tickets.push(ticket);
            added += 1;
        }
        added
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Ticket> {
        self.code_index.get(code).map(|&i| &self.tickets[i])
    }

    pub fn tickets_for_event<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a Ticket> {
        self.tickets.iter().filter(move |t| t.event_id == event_id)
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
