//! Statistics tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::GateResult;
use crate::gate::Gate;
use crate::protocol::{Tool, ToolDefinition};
use crate::server::json_content;

/// Anomalies listed under the dashboard counters
const RECENT_ANOMALIES: usize = 3;

pub struct GetStatsTool {
    gate: Arc<Gate>,
}

impl GetStatsTool {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

#[derive(Deserialize)]
struct StatsArgs {
    #[serde(rename = "eventId")]
    event_id: Option<String>,
}

impl Tool for GetStatsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_stats",
            "Admission counters for the active event (or a given one)",
            json!({
                "type": "object",
                "properties": {
                    "eventId": { "type": "string", "description": "Defaults to the active event" }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> GateResult<Value> {
        let args: StatsArgs = serde_json::from_value(params)?;

        let (stats, recent) = match args.event_id {
            Some(id) => (self.gate.stats_for(&id)?, None),
            None => (
                self.gate.stats()?,
                Some(self.gate.recent_anomalies(RECENT_ANOMALIES)?),
            ),
        };

        json_content(&json!({
            "stats": stats,
            "occupancyPercent": stats.occupancy_percent(),
            "overCapacity": stats.is_over_capacity(),
            "breakdown": stats.breakdown(),
            "recentAnomalies": recent
        }))
    }
}
