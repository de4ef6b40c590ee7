//! Station protocol types
//!
//! Line-delimited JSON-RPC 2.0 plus the tool descriptor and trait the
//! server dispatches through.

mod jsonrpc;
mod tool;

pub use jsonrpc::{ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use jsonrpc::{INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};
pub use tool::{ServerInfo, Tool, ToolDefinition};
