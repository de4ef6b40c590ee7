//! Station server
//!
//! Reads one JSON-RPC request per line and writes one response per line.
//! Runs over stdio in the binary and over in-memory buffers in tests.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::GateResult;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo, Tool, ToolDefinition};

pub use handlers::{extract_arguments, extract_tool_name, json_content};

const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC server dispatching to registered tools
pub struct StationServer<R, W> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl StationServer<BufReader<Stdin>, Stdout> {
    /// Server on the process stdin/stdout
    pub fn stdio(info: ServerInfo) -> Self {
        Self::new(info, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> StationServer<R, W> {
    pub fn new(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve until the reader is exhausted
    pub fn run(&mut self) -> GateResult<()> {
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }
        Ok(())
    }

    /// Consume the server, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn handle_request(&mut self, request_str: &str) -> GateResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "Unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        debug!(method = %request.method, "Request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            other => self.send(&JsonRpcError::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> GateResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> GateResult<()> {
        let tools: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> GateResult<()> {
        let params = params.unwrap_or(Value::Null);
        let Some(tool_name) = extract_tool_name(&params) else {
            return self.send(&JsonRpcError::invalid_params(id, "missing tool name"));
        };

        let result = self
            .tools
            .get(tool_name)
            .map(|tool| tool.execute(extract_arguments(&params)));
        let Some(result) = result else {
            let details = format!("unknown tool '{}'", tool_name);
            return self.send(&JsonRpcError::invalid_params(id, &details));
        };

        match result {
            Ok(value) => self.send(&JsonRpcResponse::new(id, value)),
            Err(e) => {
                warn!(tool = tool_name, error = %e, "Tool failed");
                let response = JsonRpcError::tool_error(id, e.code(), e.to_string());
                self.send(&response)
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> GateResult<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
