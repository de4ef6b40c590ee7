//! Append-only scan log with an admission index

use std::collections::HashSet;

use crate::types::ScanEntry;

/// Ordered scan history across all events
#[derive(Debug, Clone, Default)]
pub struct ScanLedger {
    entries: Vec<ScanEntry>,
    /// (event id, code) pairs holding a success entry
    admitted: HashSet<(String, String)>,
    /// Entry ids already in use
    ids: HashSet<String>,
}

impl ScanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted entries in insertion order
    pub fn from_entries(entries: Vec<ScanEntry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.append(entry);
        }
        ledger
    }

    /// Append an entry; existing entries are never touched
    pub fn append(&mut self, entry: ScanEntry) -> &ScanEntry {
        if entry.is_success() {
            self.admitted
                .insert((entry.event_id.clone(), entry.code.clone()));
        }
        self.ids.insert(entry.id.clone());
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Whether `code` was already admitted at `event_id`
    pub fn has_success(&self, event_id: &str, code: &str) -> bool {
        self.admitted
            .contains(&(event_id.to_string(), code.to_string()))
    }

    /// Whether an entry already carries `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Entries of one event, newest first
    pub fn entries_for<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a ScanEntry> {
        self.entries
            .iter()
            .rev()
            .filter(move |e| e.event_id == event_id)
    }

    /// Entries of one event matching a search term, newest first
    ///
    /// The match is a case-insensitive substring test on code, holder name
    /// and message. A blank query matches everything.
    pub fn search(&self, event_id: &str, query: Option<&str>, limit: Option<usize>) -> Vec<ScanEntry> {
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        let matching = self
            .entries_for(event_id)
            .filter(|e| needle.is_empty() || e.matches(&needle))
            .cloned();

        match limit {
            Some(lim) => matching.take(lim).collect(),
            None => matching.collect(),
        }
    }

    /// Newest non-success entries of one event
    pub fn recent_anomalies(&self, event_id: &str, count: usize) -> Vec<ScanEntry> {
        self.entries_for(event_id)
            .filter(|e| !e.is_success())
            .take(count)
            .cloned()
            .collect()
    }

    /// Every entry in insertion order
    pub fn all(&self) -> &[ScanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutcomeKind;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(n: i64, event_id: &str, code: &str, kind: OutcomeKind) -> ScanEntry {
        ScanEntry {
            id: format!("sc-{}", n),
            event_id: event_id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 8, 15, 20, 0, 0).unwrap() + Duration::seconds(n),
            code: code.to_string(),
            kind,
            message: kind.to_string(),
            holder_name: None,
        }
    }

    #[test]
    fn test_success_index() {
        let mut ledger = ScanLedger::new();
        ledger.append(entry(1, "ev-1", "A", OutcomeKind::Error));
        assert!(!ledger.has_success("ev-1", "A"));

        ledger.append(entry(2, "ev-1", "A", OutcomeKind::Success));
        assert!(ledger.has_success("ev-1", "A"));
        assert!(!ledger.has_success("ev-2", "A"));
        assert!(!ledger.has_success("ev-1", "B"));
    }

    #[test]
    fn test_contains_id() {
        let ledger = ScanLedger::from_entries(vec![entry(7, "ev-1", "A", OutcomeKind::Error)]);
        assert!(ledger.contains_id("sc-7"));
        assert!(!ledger.contains_id("sc-8"));
    }

    #[test]
    fn test_warning_does_not_mark_admission() {
        let mut ledger = ScanLedger::new();
        ledger.append(entry(1, "ev-1", "A", OutcomeKind::Warning));
        assert!(!ledger.has_success("ev-1", "A"));
    }

    #[test]
    fn test_entries_for_newest_first() {
        let mut ledger = ScanLedger::new();
        ledger.append(entry(1, "ev-1", "A", OutcomeKind::Success));
        ledger.append(entry(2, "ev-2", "B", OutcomeKind::Success));
        ledger.append(entry(3, "ev-1", "C", OutcomeKind::Error));

        let ids: Vec<&str> = ledger.entries_for("ev-1").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["sc-3", "sc-1"]);

        let all: Vec<&str> = ledger.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(all, vec!["sc-1", "sc-2", "sc-3"]);
    }

    #[test]
    fn test_from_entries_rebuilds_index() {
        let ledger = ScanLedger::from_entries(vec![
            entry(1, "ev-1", "A", OutcomeKind::Success),
            entry(2, "ev-1", "B", OutcomeKind::Warning),
        ]);
        assert_eq!(ledger.len(), 2);
        assert!(ledger.has_success("ev-1", "A"));
        assert!(!ledger.has_success("ev-1", "B"));
    }

    #[test]
    fn test_search_and_limit() {
        let mut ledger = ScanLedger::new();
        ledger.append(entry(1, "ev-1", "TKT-1", OutcomeKind::Success));
        ledger.append(entry(2, "ev-1", "junk", OutcomeKind::Error));
        ledger.append(entry(3, "ev-1", "TKT-2", OutcomeKind::Success));

        let hits = ledger.search("ev-1", Some("tkt"), None);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "sc-3");

        assert_eq!(ledger.search("ev-1", Some("  "), None).len(), 3);
        assert_eq!(ledger.search("ev-1", None, Some(1)).len(), 1);
        assert!(ledger.search("ev-2", None, None).is_empty());
    }

    #[test]
    fn test_recent_anomalies() {
        let mut ledger = ScanLedger::new();
        for n in 1..=5 {
            ledger.append(entry(n, "ev-1", "X", OutcomeKind::Error));
        }
        ledger.append(entry(6, "ev-1", "Y", OutcomeKind::Success));

        let recent = ledger.recent_anomalies("ev-1", 3);
        let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["sc-5", "sc-4", "sc-3"]);
    }
}
