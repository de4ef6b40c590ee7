//! Request helpers shared by the server and the tools

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::GateResult;

/// Tool arguments, an empty object when absent
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(Map::new()))
}

pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Wrap a payload as pretty-printed text content
pub fn json_content<T: Serialize + ?Sized>(payload: &T) -> GateResult<Value> {
    Ok(json!({
        "content": [{
            "type": "text",
            "text": serde_json::to_string_pretty(payload)?
        }]
    }))
}
