//! Station tools
//!
//! Seven tools in three groups:
//! - Scanning (1): submit a code at the door
//! - Events (3): create, list, select the active event
//! - Reports (3): statistics, scan history, ticket lists

pub mod events;
pub mod reports;
pub mod scanning;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::server::StationServer;
use crate::station::ScanStation;

pub use events::{CreateEventTool, ListEventsTool, SelectEventTool};
pub use reports::{GetScanHistoryTool, GetStatsTool, ListTicketsTool};
pub use scanning::ScanTicketTool;

/// Register every tool against one station and its gate
pub fn register_all_tools<R: BufRead, W: Write>(server: &mut StationServer<R, W>, station: Arc<ScanStation>) {
    let gate = station.gate().clone();

    server.register_tool(Box::new(ScanTicketTool::new(station)));

    server.register_tool(Box::new(CreateEventTool::new(gate.clone())));
    server.register_tool(Box::new(ListEventsTool::new(gate.clone())));
    server.register_tool(Box::new(SelectEventTool::new(gate.clone())));

    server.register_tool(Box::new(GetStatsTool::new(gate.clone())));
    server.register_tool(Box::new(GetScanHistoryTool::new(gate.clone())));
    server.register_tool(Box::new(ListTicketsTool::new(gate)));
}
