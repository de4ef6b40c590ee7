//! End-to-end JSON-RPC sessions against a station

use std::io::Cursor;
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use gatepass::protocol::ServerInfo;
use gatepass::storage::MemoryBlobStore;
use gatepass::tools::register_all_tools;
use gatepass::utils::{ManualClock, SequentialIds};
use gatepass::{Gate, GateConfig, ScanStation, StationServer};
use serde_json::{json, Value};

fn station(lockout_ms: u64) -> (Arc<ScanStation>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 8, 15, 19, 0, 0).unwrap(),
    ));
    let gate = Gate::with_parts(
        GateConfig::default()
            .with_scan_lockout_ms(lockout_ms)
            .with_demo_ticket(true),
        Arc::new(MemoryBlobStore::new()),
        clock.clone(),
        Arc::new(SequentialIds::new()),
    );
    (Arc::new(ScanStation::new(Arc::new(gate))), clock)
}

fn call(id: u64, name: &str, arguments: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
    .to_string()
}

fn session(station: Arc<ScanStation>, requests: &[String]) -> Vec<Value> {
    let input = requests.join("\n") + "\n";
    let mut server = StationServer::new(
        ServerInfo::default(),
        Cursor::new(input.into_bytes()),
        Vec::new(),
    );
    register_all_tools(&mut server, station);
    server.run().unwrap();

    String::from_utf8(server.into_writer())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

/// Parse the text payload of a tool result
fn payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[test]
fn test_lists_all_tools() {
    let (station, _clock) = station(0);
    let out = session(
        station,
        &[json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}).to_string()],
    );

    let mut names: Vec<&str> = out[0]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "create_event",
            "get_scan_history",
            "get_stats",
            "list_events",
            "list_tickets",
            "scan_ticket",
            "select_event",
        ]
    );
}

#[test]
fn test_scan_session() {
    let (station, _clock) = station(0);
    let out = session(
        station,
        &[
            call(1, "scan_ticket", json!({ "code": "TKT-VIP-001" })),
            call(2, "scan_ticket", json!({ "code": "TKT-VIP-001" })),
            call(3, "scan_ticket", json!({ "code": "   " })),
            call(4, "get_stats", json!({})),
        ],
    );
    assert_eq!(out.len(), 4);

    let first = payload(&out[0]);
    assert_eq!(first["label"], "VALID");
    assert_eq!(first["result"]["status"], "decided");
    assert_eq!(first["result"]["outcome"]["holderName"], "Jean Dupont");

    let second = payload(&out[1]);
    assert_eq!(second["label"], "ALREADY SCANNED");
    assert_eq!(second["result"]["outcome"]["message"], "already used");

    assert_eq!(out[2]["error"]["code"], -32603);
    assert_eq!(out[2]["error"]["data"]["code"], "EMPTY_CODE");

    let stats = payload(&out[3]);
    assert_eq!(stats["stats"]["scannedCount"], 1);
    assert_eq!(stats["stats"]["vipCount"], 1);
    assert_eq!(stats["stats"]["anomalies"], 1);
    assert_eq!(stats["recentAnomalies"].as_array().unwrap().len(), 1);
}

#[test]
fn test_event_lifecycle_session() {
    let (station, _clock) = station(0);
    let out = session(
        station,
        &[
            call(
                1,
                "create_event",
                json!({
                    "name": "Gala",
                    "date": "2025-12-31",
                    "location": "Opera",
                    "capacity": 3,
                    "category": "Gala",
                    "ticketCount": 3
                }),
            ),
            call(2, "select_event", json!({ "eventId": "ev-2" })),
            call(3, "select_event", json!({ "eventId": "ev-404" })),
            call(4, "list_events", json!({})),
        ],
    );

    let created = payload(&out[0]);
    assert_eq!(created["ticketsIssued"], 3);
    assert!(created["warning"].is_string());

    assert!(out[1].get("result").is_some());
    assert_eq!(out[2]["error"]["data"]["code"], "EVENT_NOT_FOUND");

    let listing = payload(&out[3]);
    assert_eq!(listing["activeEventId"], "ev-2");
    assert_eq!(listing["events"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_lockout_suppresses_rapid_rescan() {
    let (station, clock) = station(3500);

    let out = session(
        station.clone(),
        &[
            call(1, "scan_ticket", json!({ "code": "TKT-VIP-001" })),
            call(2, "scan_ticket", json!({ "code": "TKT-VIP-001" })),
        ],
    );
    assert_eq!(payload(&out[0])["label"], "VALID");
    assert_eq!(payload(&out[1])["label"], "WAIT");
    assert_eq!(station.gate().ledger_snapshot().len(), 1);

    clock.advance(Duration::milliseconds(3500));
    let out = session(
        station.clone(),
        &[call(3, "scan_ticket", json!({ "code": "TKT-VIP-001" }))],
    );
    assert_eq!(payload(&out[0])["label"], "ALREADY SCANNED");
    assert_eq!(station.gate().ledger_snapshot().len(), 2);
}

#[test]
fn test_unknown_tool_and_bad_json() {
    let (station, _clock) = station(0);
    let out = session(
        station,
        &[
            call(1, "delete_everything", json!({})),
            "{ nope".to_string(),
            json!({"jsonrpc": "2.0", "id": 2, "method": "nope"}).to_string(),
        ],
    );

    assert_eq!(out[0]["error"]["code"], -32602);
    assert_eq!(out[1]["error"]["code"], -32700);
    assert_eq!(out[2]["error"]["code"], -32601);
}
