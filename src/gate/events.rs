//! Event creation and active-event selection

use serde::Serialize;
use tracing::info;

use crate::error::GateResult;
use crate::registry::issue_tickets;
use crate::storage::{save_active_event, save_events, save_tickets};
use crate::types::{Event, NewEvent};
use crate::validation::{validate_category, validate_new_event};

use super::Gate;

/// Result of creating an event
#[derive(Debug, Clone, Serialize)]
pub struct EventCreated {
    pub event: Event,
    #[serde(rename = "ticketsIssued")]
    pub tickets_issued: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Create an event and issue its tickets in one step
///
/// Both collections are applied in memory before they are saved; a save
/// error is returned but the event stays registered.
pub fn create_event(gate: &Gate, new_event: NewEvent, ticket_count: u32) -> GateResult<EventCreated> {
    validate_new_event(&new_event)?;
    let warning = validate_category(&new_event.category);

    let new_event = NewEvent {
        name: new_event.name.trim().to_string(),
        date: new_event.date.trim().to_string(),
        location: new_event.location.trim().to_string(),
        ..new_event
    };

    let mut state = gate.state.lock();

    let event_id = loop {
        let candidate = gate.ids.next_id("ev");
        if !state.events.contains(&candidate) {
            break candidate;
        }
    };

    let event = Event::from_new(event_id, new_event);
    let tickets = issue_tickets(&event.id, ticket_count, gate.config.vip_every);
    let tickets_issued = state.tickets.extend(tickets);
    state.events.add(event.clone());

    info!(
        event_id = %event.id,
        name = %event.name,
        capacity = event.capacity,
        tickets = tickets_issued,
        "Event created"
    );

    // Tickets first: stored tickets of an unstored event are never admitted
    save_tickets(gate.store.as_ref(), state.tickets.all())?;
    save_events(gate.store.as_ref(), state.events.all())?;

    Ok(EventCreated {
        event,
        tickets_issued,
        warning,
    })
}

/// Switch scanning to another event
pub fn select_event(gate: &Gate, event_id: &str) -> GateResult<Event> {
    let mut state = gate.state.lock();
    let event = state.events.select(event_id)?.clone();
    save_active_event(gate.store.as_ref(), &event.id)?;
    Ok(event)
}
