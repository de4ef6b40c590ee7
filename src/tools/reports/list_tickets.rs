//! Ticket list tool, the data behind printed passes

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;

pub struct ListTicketsTool {
    gate: Arc<Gate>,
}

impl ListTicketsTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

#[derive(Deserialize)]
struct TicketsArgs {
    #[serde(rename = "eventId")]
    event_id: Option<String>,
}

impl Tool for ListTicketsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "list_tickets",
            "All tickets issued for an event (defaults to the active event)",
            json!({
                "type": "object",
                "properties": {
                    "eventId": { "type": "string" }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: TicketsArgs = serde_json::from_value(params)?;
        let event_id = match args.event_id {
            Some(id) => id,
            None => self.gate.active_event()?.id,
        };
        let tickets = self.gate.tickets_for_event(&event_id)?;
        json_content(&json!({ "eventId": event_id, "tickets": tickets }))
    }
}
