//! Select active event tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;

pub struct SelectEventTool {
    gate: Arc<Gate>,
}

impl SelectEventTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

#[derive(Deserialize)]
struct SelectArgs {
    #[serde(rename = "eventId")]
    event_id: String,
}

impl Tool for SelectEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "select_event",
            "Make an event the active one; all scans are checked against it",
            json!({
                "type": "object",
                "properties": {
                    "eventId": { "type": "string" }
                },
                "required": ["eventId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: SelectArgs = serde_json::from_value(params)?;
        let event = self.gate.select_event(&args.event_id)?;
        json_content(&event)
    }
}
