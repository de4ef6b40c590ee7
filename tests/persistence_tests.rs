//! State surviving restarts on the file blob store

use std::fs;
use std::sync::Arc;

use gatepass::storage::FileBlobStore;
use gatepass::utils::{SequentialIds, SystemClock};
use gatepass::{Gate, GateConfig, NewEvent, OutcomeKind, ScanVerdict};
use tempfile::TempDir;

fn open_gate(dir: &TempDir, first_id: u64) -> Gate {
    let store = FileBlobStore::open(dir.path()).unwrap();
    Gate::with_parts(
        GateConfig::default().with_data_dir(dir.path()),
        Arc::new(store),
        Arc::new(SystemClock),
        Arc::new(SequentialIds::starting_at(first_id)),
    )
}

#[test]
fn test_duplicate_detected_across_restart() {
    let dir = TempDir::new().unwrap();

    let (event_id, code) = {
        let gate = open_gate(&dir, 1);
        let created = gate
            .create_event(NewEvent::new("Night", "2025-07-01", "Dock", 10, "Electro"), 5)
            .unwrap();
        gate.select_event(&created.event.id).unwrap();
        let code = format!("TKT-{}-002", created.event.id.to_uppercase());
        assert!(gate.scan(&code).unwrap().admitted);
        (created.event.id, code)
    };

    let gate = open_gate(&dir, 1000);
    assert_eq!(gate.active_event().unwrap().id, event_id);
    assert_eq!(gate.tickets_for_event(&event_id).unwrap().len(), 5);
    assert_eq!(gate.ledger_snapshot().len(), 1);

    let outcome = gate.scan(&code).unwrap();
    assert_eq!(outcome.verdict, ScanVerdict::AlreadyAdmitted);
    assert_eq!(outcome.kind, OutcomeKind::Warning);
}

#[test]
fn test_blob_files_written() {
    let dir = TempDir::new().unwrap();
    let gate = open_gate(&dir, 1);

    gate.create_event(NewEvent::new("Quiz", "2025-02-02", "", 30, "Other"), 3)
        .unwrap();
    gate.scan("nothing").unwrap();

    for key in ["events", "tickets", "scans"] {
        assert!(dir.path().join(format!("{}.json", key)).exists(), "{} missing", key);
    }

    let tickets: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("tickets.json")).unwrap()).unwrap();
    assert_eq!(tickets.as_array().unwrap().len(), 3);
    assert!(tickets[0].get("qrData").is_some());
    assert!(tickets[0].get("holderName").is_some());
}

#[test]
fn test_corrupt_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("events.json"), "{ not json").unwrap();
    fs::write(dir.path().join("scans.json"), "42").unwrap();
    fs::write(dir.path().join("active_event.json"), "[]").unwrap();

    let gate = open_gate(&dir, 1);

    let ids: Vec<String> = gate.events().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["ev-1", "ev-2"]);
    assert_eq!(gate.active_event().unwrap().id, "ev-1");
    assert!(gate.ledger_snapshot().is_empty());
}

#[test]
fn test_dangling_active_event_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("active_event.json"), "\"ev-gone\"").unwrap();

    let gate = open_gate(&dir, 1);

    assert_eq!(gate.active_event().unwrap().id, "ev-1");
}

#[test]
fn test_leftover_temp_files_removed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scans.tmp"), "[{\"half").unwrap();

    let _gate = open_gate(&dir, 1);

    assert!(!dir.path().join("scans.tmp").exists());
}
