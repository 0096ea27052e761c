use serde_json::{Value, json};

use super::jsonrpc::{JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse};
use super::tools;
use crate::gcal::GcalClient;

/// Handle an MCP JSON-RPC request. Returns the response value to serialize.
pub async fn handle_request(client: &GcalClient, request: &JsonRpcRequest) -> Value {
    match request.method.as_str() {
        "initialize" => handle_initialize(request),
        "notifications/initialized" => {
            // Notification — no response needed
            Value::Null
        }
        "tools/list" => handle_tools_list(request),
        "tools/call" => handle_tools_call(client, request).await,
        "ping" => {
            serde_json::to_value(JsonRpcResponse::success(request.id.clone(), json!({}))).unwrap()
        }
        _ => serde_json::to_value(JsonRpcErrorResponse::method_not_found(request.id.clone()))
            .unwrap(),
    }
}

/// Handle the MCP initialize request.
fn handle_initialize(request: &JsonRpcRequest) -> Value {
    let result = json!({
        "protocolVersion": "2025-03-26",
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "serverInfo": {
            "name": "gcal-mcp-server",
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "This MCP server exposes the Google Calendar v3 REST API. Use list_calendars to see available calendars, list_events / search_events to read events, and create_event, patch_event, delete_event, etc. to manage them. calendar_id defaults to \"primary\"."
    });

    serde_json::to_value(JsonRpcResponse::success(request.id.clone(), result)).unwrap()
}

/// Handle tools/list — return all tool definitions.
fn handle_tools_list(request: &JsonRpcRequest) -> Value {
    let tool_defs = tools::all_tools();
    let tools_json: Vec<Value> = tool_defs
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.description,
                "inputSchema": t.input_schema,
            })
        })
        .collect();

    serde_json::to_value(JsonRpcResponse::success(
        request.id.clone(),
        json!({ "tools": tools_json }),
    ))
    .unwrap()
}

/// Handle tools/call — dispatch to the appropriate tool handler.
async fn handle_tools_call(client: &GcalClient, request: &JsonRpcRequest) -> Value {
    let tool_name = match request.params.get("name").and_then(|v| v.as_str()) {
        Some(name) => name,
        None => {
            return serde_json::to_value(JsonRpcErrorResponse::invalid_params(
                request.id.clone(),
                "Missing 'name' in params",
            ))
            .unwrap();
        }
    };

    let arguments = request
        .params
        .get("arguments")
        .cloned()
        .unwrap_or(json!({}));

    match tools::dispatch(client, tool_name, &arguments).await {
        Ok(result) => {
            let content = json!({
                "content": [{
                    "type": "text",
                    "text": serde_json::to_string_pretty(&result).unwrap_or_default()
                }],
                "structuredContent": result,
                "isError": false
            });
            serde_json::to_value(JsonRpcResponse::success(request.id.clone(), content)).unwrap()
        }
        Err(err) => {
            let content = json!({
                "content": [{
                    "type": "text",
                    "text": err
                }],
                "isError": true
            });
            serde_json::to_value(JsonRpcResponse::success(request.id.clone(), content)).unwrap()
        }
    }
}
