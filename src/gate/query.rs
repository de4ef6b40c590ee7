//! Read-only views over gate state
//!
//! Nothing here mutates the registries or the ledger.

use crate::engine::compute_stats;
use crate::error::{GateError, GateResult};
use crate::types::{Event, ScanEntry, SecurityStats, Ticket};

use super::Gate;

pub fn events(gate: &Gate) -> Vec<Event> {
    gate.state.lock().events.all().to_vec()
}

pub fn active_event(gate: &Gate) -> GateResult<Event> {
    gate.state
        .lock()
        .events
        .active()
        .cloned()
        .ok_or(GateError::NoActiveEvent)
}

/// Tickets of one event in issue order, for printing
pub fn tickets_for_event(gate: &Gate, event_id: &str) -> GateResult<Vec<Ticket>> {
    let state = gate.state.lock();
    if !state.events.contains(event_id) {
        return Err(GateError::EventNotFound(event_id.to_string()));
    }
    Ok(state.tickets.tickets_for_event(event_id).cloned().collect())
}

/// Statistics of the active event
pub fn stats(gate: &Gate) -> GateResult<SecurityStats> {
    let state = gate.state.lock();
    let event = state.events.active().ok_or(GateError::NoActiveEvent)?;
    Ok(compute_stats(event, &state.tickets, &state.ledger))
}

pub fn stats_for(gate: &Gate, event_id: &str) -> GateResult<SecurityStats> {
    let state = gate.state.lock();
    let event = state
        .events
        .get(event_id)
        .ok_or_else(|| GateError::EventNotFound(event_id.to_string()))?;
    Ok(compute_stats(event, &state.tickets, &state.ledger))
}

/// Scan history of the active event, newest first
pub fn history(gate: &Gate, query: Option<&str>, limit: Option<usize>) -> GateResult<Vec<ScanEntry>> {
    let state = gate.state.lock();
    let event = state.events.active().ok_or(GateError::NoActiveEvent)?;
    Ok(state.ledger.search(&event.id, query, limit))
}

pub fn recent_anomalies(gate: &Gate, count: usize) -> GateResult<Vec<ScanEntry>> {
    let state = gate.state.lock();
    let event = state.events.active().ok_or(GateError::NoActiveEvent)?;
    Ok(state.ledger.recent_anomalies(&event.id, count))
}

/// Whole ledger in insertion order
pub fn ledger_snapshot(gate: &Gate) -> Vec<ScanEntry> {
    gate.state.lock().ledger.all().to_vec()
}
