//! Scan ledger entries and scan outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome kind recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Success => write!(f, "success"),
            OutcomeKind::Warning => write!(f, "warning"),
            OutcomeKind::Error => write!(f, "error"),
        }
    }
}

/// Decision taken for one scan
///
/// The three rejections are ordinary outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanVerdict {
    /// No ticket carries the scanned code
    UnknownCode,
    /// The ticket belongs to another event
    WrongEvent,
    /// The ticket already has a successful entry for this event
    AlreadyAdmitted,
    /// First valid presentation of the ticket
    Admitted,
}

impl ScanVerdict {
    pub fn is_admitted(&self) -> bool {
        matches!(self, ScanVerdict::Admitted)
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            ScanVerdict::UnknownCode | ScanVerdict::WrongEvent => OutcomeKind::Error,
            ScanVerdict::AlreadyAdmitted => OutcomeKind::Warning,
            ScanVerdict::Admitted => OutcomeKind::Success,
        }
    }

    /// Message stored in the ledger
    pub fn message(&self) -> &'static str {
        match self {
            ScanVerdict::UnknownCode => "invalid code",
            ScanVerdict::WrongEvent => "wrong event",
            ScanVerdict::AlreadyAdmitted => "already used",
            ScanVerdict::Admitted => "entry authorized",
        }
    }

    /// Short banner shown at the door
    pub fn label(&self) -> &'static str {
        match self {
            ScanVerdict::UnknownCode => "INVALID",
            ScanVerdict::WrongEvent => "WRONG EVENT",
            ScanVerdict::AlreadyAdmitted => "ALREADY SCANNED",
            ScanVerdict::Admitted => "VALID",
        }
    }
}

/// One ledger record; append-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    /// Raw scanned code, which may match no ticket
    #[serde(alias = "ticketId")]
    pub code: String,
    #[serde(rename = "status")]
    pub kind: OutcomeKind,
    pub message: String,
    #[serde(rename = "holderName", default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
}

impl ScanEntry {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    /// Case-insensitive match on code, holder name or message
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle)
            || self
                .holder_name
                .as_ref()
                .is_some_and(|h| h.to_lowercase().contains(needle))
            || self.message.to_lowercase().contains(needle)
    }
}

/// Result of validating one scan, echoed to the station for feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub verdict: ScanVerdict,
    pub admitted: bool,
    pub kind: OutcomeKind,
    pub message: String,
    #[serde(rename = "holderName", default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Identifier of the ledger entry recording this outcome
    #[serde(rename = "entryId")]
    pub entry_id: String,
}

impl Outcome {
    /// Echo of a ledger entry
    pub fn from_entry(verdict: ScanVerdict, entry: &ScanEntry) -> Self {
        Self {
            verdict,
            admitted: verdict.is_admitted(),
            kind: entry.kind,
            message: entry.message.clone(),
            holder_name: entry.holder_name.clone(),
            entry_id: entry.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_kinds() {
        assert_eq!(ScanVerdict::UnknownCode.kind(), OutcomeKind::Error);
        assert_eq!(ScanVerdict::WrongEvent.kind(), OutcomeKind::Error);
        assert_eq!(ScanVerdict::AlreadyAdmitted.kind(), OutcomeKind::Warning);
        assert_eq!(ScanVerdict::Admitted.kind(), OutcomeKind::Success);
        assert!(ScanVerdict::Admitted.is_admitted());
        assert!(!ScanVerdict::AlreadyAdmitted.is_admitted());
    }

    #[test]
    fn test_entry_accepts_legacy_ticket_id_field() {
        let entry: ScanEntry = serde_json::from_str(
            r#"{"id":"sc-1","eventId":"ev-1","timestamp":"2024-08-15T20:00:00Z",
                "ticketId":"TKT-1","status":"warning","message":"already used",
                "holderName":"Ana"}"#,
        )
        .unwrap();
        assert_eq!(entry.code, "TKT-1");
        assert_eq!(entry.kind, OutcomeKind::Warning);
        assert_eq!(entry.holder_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_entry_matches_search() {
        let entry = ScanEntry {
            id: "sc-1".to_string(),
            event_id: "ev-1".to_string(),
            timestamp: Utc::now(),
            code: "TKT-EV-1-004".to_string(),
            kind: OutcomeKind::Success,
            message: "entry authorized".to_string(),
            holder_name: Some("Client #4".to_string()),
        };
        assert!(entry.matches("tkt-ev"));
        assert!(entry.matches("client #4"));
        assert!(entry.matches("authorized"));
        assert!(!entry.matches("backstage"));
    }
}
