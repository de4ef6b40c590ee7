//! Validation Engine
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. unknown code
//! 2. ticket of another event
//! 3. already admitted at this event
//! 4. admitted
//!
//! Every call appends exactly one ledger entry, under an id no other
//! entry holds, and returns its echo.

use tracing::debug;

use crate::ledger::ScanLedger;
use crate::registry::TicketRegistry;
use crate::types::{Outcome, ScanEntry, ScanVerdict};
use crate::utils::{Clock, IdSource};

/// Read-only inputs of a scan decision
pub struct ScanContext<'a> {
    pub active_event_id: &'a str,
    pub tickets: &'a TicketRegistry,
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdSource,
}

/// Decide admission for `code` and append the outcome to `ledger`
///
/// The code is taken as-is; blank codes are filtered out by the caller.
pub fn validate(code: &str, ctx: &ScanContext<'_>, ledger: &mut ScanLedger) -> Outcome {
    let ticket = ctx.tickets.find_by_code(code);

    let (verdict, holder_name) = match ticket {
        None => (ScanVerdict::UnknownCode, None),
        Some(t) if t.event_id != ctx.active_event_id => (ScanVerdict::WrongEvent, None),
        Some(t) if ledger.has_success(ctx.active_event_id, code) => {
            (ScanVerdict::AlreadyAdmitted, Some(t.holder_name.clone()))
        }
        Some(t) => (ScanVerdict::Admitted, Some(t.holder_name.clone())),
    };

    let id = loop {
        let candidate = ctx.ids.next_id("sc");
        if !ledger.contains_id(&candidate) {
            break candidate;
        }
    };

    let entry = ScanEntry {
        id,
        event_id: ctx.active_event_id.to_string(),
        timestamp: ctx.clock.now(),
        code: code.to_string(),
        kind: verdict.kind(),
        message: verdict.message().to_string(),
        holder_name,
    };

    debug!(
        event_id = %entry.event_id,
        code = %entry.code,
        verdict = ?verdict,
        "Scan decided"
    );

    let recorded = ledger.append(entry);
    Outcome::from_entry(verdict, recorded)
}
