//! List events tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;

pub struct ListEventsTool {
    gate: Arc<Gate>,
}

impl ListEventsTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

impl Tool for ListEventsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "list_events",
            "List all events and the one currently being scanned",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> GateResult<Value> {
        let active = self.gate.active_event().ok().map(|e| e.id);
        json_content(&json!({
            "activeEventId": active,
            "events": self.gate.events()
        }))
    }
}
