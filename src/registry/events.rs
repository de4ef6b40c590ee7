//! Event registry and active-event tracking

use tracing::info;

use crate::error::{GateError, GateResult};
use crate::types::{Event, EventStatus};

/// Active event id on a fresh store
pub const DEFAULT_ACTIVE_EVENT: &str = "ev-1";

/// Events used when nothing was persisted
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "ev-1".to_string(),
            name: "Neon Pulse Festival".to_string(),
            date: "2024-08-15".to_string(),
            location: "Stade de France".to_string(),
            capacity: 50_000,
            status: EventStatus::Active,
            category: "Electro".to_string(),
        },
        Event {
            id: "ev-2".to_string(),
            name: "Jazz Under Stars".to_string(),
            date: "2024-09-02".to_string(),
            location: "Jardins du Luxembourg".to_string(),
            capacity: 1_200,
            status: EventStatus::Upcoming,
            category: "Jazz".to_string(),
        },
    ]
}

/// All events plus the id of the one being scanned
#[derive(Debug, Clone)]
pub struct EventRegistry {
    events: Vec<Event>,
    active_id: String,
}

impl EventRegistry {
    pub fn new(events: Vec<Event>, active_id: String) -> Self {
        Self { events, active_id }
    }

    /// Seed events with the default active id
    pub fn seeded() -> Self {
        Self::new(seed_events(), DEFAULT_ACTIVE_EVENT.to_string())
    }

    /// The active event
    ///
    /// Falls back to the first event when the stored id names none.
    pub fn active(&self) -> Option<&Event> {
        self.get(&self.active_id).or_else(|| self.events.first())
    }

    /// Stored active id, which may be dangling
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Make `event_id` the active event
    pub fn select(&mut self, event_id: &str) -> GateResult<&Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| GateError::EventNotFound(event_id.to_string()))?;

        self.active_id = event_id.to_string();
        let event = &self.events[index];
        info!(event_id = %event.id, name = %event.name, "Active event changed");
        Ok(event)
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn get(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.get(event_id).is_some()
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
