//! Ticket types

use serde::{Deserialize, Serialize};

/// Ticket tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketTier {
    #[serde(rename = "VIP")]
    Vip,
    Standard,
    Backstage,
}

impl std::fmt::Display for TicketTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketTier::Vip => write!(f, "VIP"),
            TicketTier::Standard => write!(f, "Standard"),
            TicketTier::Backstage => write!(f, "Backstage"),
        }
    }
}

/// Advisory ticket status
///
/// Admission is decided from the scan ledger, never from this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Valid,
    Invalid,
    AlreadyScanned,
}

/// A ticket issued for exactly one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "holderName")]
    pub holder_name: String,
    #[serde(rename = "type")]
    pub tier: TicketTier,
    pub seat: String,
    #[serde(default)]
    pub status: TicketStatus,
    /// Scan payload printed on the ticket
    #[serde(rename = "qrData")]
    pub code: String,
}

impl Ticket {
    pub fn is_vip(&self) -> bool {
        self.tier == TicketTier::Vip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_wire_names() {
        let ticket = Ticket {
            id: "TKT-EV-1-001".to_string(),
            event_id: "ev-1".to_string(),
            holder_name: "Client #1".to_string(),
            tier: TicketTier::Vip,
            seat: "Zone A - 1".to_string(),
            status: TicketStatus::Valid,
            code: "TKT-EV-1-001".to_string(),
        };

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["eventId"], "ev-1");
        assert_eq!(value["type"], "VIP");
        assert_eq!(value["qrData"], "TKT-EV-1-001");
        assert_eq!(value["status"], "valid");
    }

    #[test]
    fn test_already_scanned_status_name() {
        let json = serde_json::to_string(&TicketStatus::AlreadyScanned).unwrap();
        assert_eq!(json, "\"already_scanned\"");
    }
}
