//! Scan handling for the gate

use tracing::{info, warn};

use crate::engine::{validate, ScanContext};
use crate::error::{GateError, GateResult};
use crate::storage::save_scans;
use crate::types::Outcome;
use crate::validation::normalize_code;

use super::Gate;

/// Validate one captured code against the active event
///
/// The whole lookup, decision and ledger append happen under the gate
/// lock. A failed save is logged and the outcome still returned.
pub fn scan(gate: &Gate, raw_code: &str) -> GateResult<Outcome> {
    let code = normalize_code(raw_code)?;

    let mut guard = gate.state.lock();
    let state = &mut *guard;

    let active_event_id = state
        .events
        .active()
        .map(|e| e.id.clone())
        .ok_or(GateError::NoActiveEvent)?;

    let ctx = ScanContext {
        active_event_id: &active_event_id,
        tickets: &state.tickets,
        clock: gate.clock.as_ref(),
        ids: gate.ids.as_ref(),
    };
    let outcome = validate(code, &ctx, &mut state.ledger);

    info!(
        event_id = %active_event_id,
        code,
        kind = %outcome.kind,
        message = %outcome.message,
        "Scan recorded"
    );

    if let Err(e) = save_scans(gate.store.as_ref(), state.ledger.all()) {
        warn!(error = %e, entry_id = %outcome.entry_id, "Scan ledger not persisted");
    }

    Ok(outcome)
}
