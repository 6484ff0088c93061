use super::iso_timestamp;
use super::types::McpResponse;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::debug;

/// Server identity advertised by `getServerInfo`. The version is a protocol
/// constant, independent of the crate version.
pub const SERVER_NAME: &str = "BOTWorks MCP Server";
pub const SERVER_VERSION: &str = "1.0.0";

/// The one tool this demo server exposes.
pub const TOOL_PROCESS_DATA: &str = "processData";

static SERVER_INFO: Lazy<Value> = Lazy::new(|| {
    json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "capabilities": ["resources", "tools", "prompts"],
    })
});

static RESOURCES: Lazy<Value> = Lazy::new(|| {
    json!({
        "resources": [
            {
                "uri": "botworks://data",
                "name": "Data Resource",
                "description": "Access to application data",
            }
        ]
    })
});

static TOOLS: Lazy<Value> = Lazy::new(|| {
    json!({
        "tools": [
            {
                "name": TOOL_PROCESS_DATA,
                "description": "Process data with AI capabilities",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "input": {
                            "type": "string",
                            "description": "Input data to process",
                        }
                    },
                    "required": ["input"],
                },
            }
        ]
    })
});

/// Map a method name and optional parameters to a response.
///
/// Pure and stateless: every call is independent, total, and never blocks.
/// Unknown methods and unknown tools are expected failures, returned in-band
/// as `success: false` rather than as an `Err`.
pub fn dispatch(method: &str, params: Option<&Value>) -> McpResponse<Value> {
    debug!("Dispatching MCP method: {}", method);

    match method {
        "ping" => McpResponse::ok(json!({
            "message": "pong",
            "timestamp": iso_timestamp(),
        })),
        "getServerInfo" => McpResponse::ok(SERVER_INFO.clone()),
        "listResources" => McpResponse::ok(RESOURCES.clone()),
        "listTools" => McpResponse::ok(TOOLS.clone()),
        "callTool" => call_tool(params),
        other => McpResponse::failure(format!("Unknown method: {}", other)),
    }
}

fn call_tool(params: Option<&Value>) -> McpResponse<Value> {
    let name = params.and_then(|p| p.get("name"));

    if name.and_then(Value::as_str) == Some(TOOL_PROCESS_DATA) {
        let input = params
            .and_then(|p| p.pointer("/arguments/input"))
            .and_then(truthy_input)
            .unwrap_or_else(|| "No input provided".to_string());

        return McpResponse::ok(json!({
            "result": format!("Processed: {}", input),
        }));
    }

    // The given name appears verbatim in the error, strings unquoted.
    let shown = match name {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(none)".to_string(),
    };
    McpResponse::failure(format!("Unknown tool: {}", shown))
}

/// Falsy-fallback coercion of `arguments.input`: empty strings, zero, false,
/// and null count as absent; other scalars are interpolated the way the
/// original runtime printed them. Arrays and objects count as absent.
fn truthy_input(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null => None,
        Value::Array(_) | Value::Object(_) => None,
    }
}
