//! Create event tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;
use crate::types::NewEvent;
use crate::validation::STANDARD_CATEGORIES;

const DEFAULT_TICKET_COUNT: u32 = 10;

/// Creates an event and issues its tickets
pub struct CreateEventTool {
    gate: Arc<Gate>,
}

impl CreateEventTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

#[derive(Deserialize)]
struct CreateEventArgs {
    #[serde(flatten)]
    event: NewEvent,
    #[serde(rename = "ticketCount", default = "default_ticket_count")]
    ticket_count: u32,
}

fn default_ticket_count() -> u32 {
    DEFAULT_TICKET_COUNT
}

impl Tool for CreateEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "create_event",
            "Create an event and issue its numbered tickets",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "date": { "type": "string", "description": "YYYY-MM-DD" },
                    "location": { "type": "string" },
                    "capacity": { "type": "integer", "minimum": 1 },
                    "category": {
                        "type": "string",
                        "description": format!(
                            "Free text; unlisted values are accepted with a warning. Standard: {}",
                            STANDARD_CATEGORIES.join(", ")
                        )
                    },
                    "ticketCount": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Tickets to issue (default 10)"
                    }
                },
                "required": ["name", "date", "capacity"]
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: CreateEventArgs = serde_json::from_value(params)?;
        let created = self.gate.create_event(args.event, args.ticket_count)?;
        json_content(&created)
    }
}
