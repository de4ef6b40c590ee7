//! Scan ticket tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;
use crate::station::{ScanStation, StationResult};

/// Submits a decoded or typed code to the station
pub struct ScanTicketTool {
    station: Arc<ScanStation>,
}

impl ScanTicketTool {
    pub fn new(station: Arc<ScanStation>) -> Self {
        Self { station }
    }
}

#[derive(Deserialize)]
struct ScanArgs {
    code: String,
}

impl Tool for ScanTicketTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "scan_ticket",
            "Validate a scanned ticket code against the active event and record the outcome",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Decoded QR payload or manually typed code" }
                },
                "required": ["code"]
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: ScanArgs = serde_json::from_value(params)?;
        let result = self.station.submit(&args.code)?;

        let label = match &result {
            StationResult::Decided { outcome } => outcome.verdict.label(),
            StationResult::Suppressed => "WAIT",
        };

        json_content(&json!({ "label": label, "result": result }))
    }
}
