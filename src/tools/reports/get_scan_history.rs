//! Scan history tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;

pub struct GetScanHistoryTool {
    gate: Arc<Gate>,
}

impl GetScanHistoryTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

#[derive(Deserialize)]
struct HistoryArgs {
    query: Option<String>,
    limit: Option<usize>,
}

impl Tool for GetScanHistoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_scan_history",
            "Scan log of the active event, newest first, optionally filtered",
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Matches code, holder name or message" },
                    "limit": { "type": "integer", "minimum": 1 }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: HistoryArgs = serde_json::from_value(params)?;
        let entries = self.gate.history(args.query.as_deref(), args.limit)?;
        json_content(&entries)
    }
}
