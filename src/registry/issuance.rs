//! Bulk ticket issuance
//!
//! Tickets are numbered from 1. Every `vip_every`-th ticket is VIP, the
//! rest Standard. Seats are grouped fifty to a zone.

use crate::types::{Ticket, TicketStatus, TicketTier};

const SEATS_PER_ZONE: u32 = 50;

/// Ticket code for the `index`-th ticket of an event
///
/// Doubles as the ticket identifier.
pub fn ticket_code(event_id: &str, index: u32) -> String {
    format!("TKT-{}-{:03}", event_id.to_uppercase(), index)
}

/// Seat label derived from the ticket index
pub fn seat_label(index: u32) -> String {
    let zone = char::from_u32('A' as u32 + index / SEATS_PER_ZONE).unwrap_or('?');
    format!("Zone {} - {}", zone, index)
}

/// Generate `count` tickets for an event
///
/// A `vip_every` of zero issues no VIP tickets.
pub fn issue_tickets(event_id: &str, count: u32, vip_every: u32) -> Vec<Ticket> {
    (1..=count)
        .map(|i| {
            let code = ticket_code(event_id, i);
            let tier = if vip_every > 0 && i % vip_every == 0 {
                TicketTier::Vip
            } else {
                TicketTier::Standard
            };
            Ticket {
                id: code.clone(),
                event_id: event_id.to_string(),
                holder_name: format!("Client #{}", i),
                tier,
                seat: seat_label(i),
                status: TicketStatus::Valid,
                code,
            }
        })
        .collect()
}

/// Demo VIP pass for the first seed event
pub fn demo_ticket() -> Ticket {
    Ticket {
        id: "TKT-VIP-001".to_string(),
        event_id: "ev-1".to_string(),
        holder_name: "Jean Dupont".to_string(),
        tier: TicketTier::Vip,
        seat: "A12".to_string(),
        status: TicketStatus::Valid,
        code: "TKT-VIP-001".to_string(),
    }
}
