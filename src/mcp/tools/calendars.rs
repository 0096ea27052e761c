use serde_json::{Value, json};

use super::{ToolDef, into_tool_result};
use crate::gcal::{GcalClient, calendars};

pub fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "list_calendars",
            description: "List all calendars accessible by the user",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_calendar",
            description: "Get details of a specific calendar",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"}
                },
                "required": ["calendar_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "create_calendar",
            description: "Create a secondary calendar",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "summary": {"type": "string", "description": "Calendar title"},
                    "description": {"type": "string", "description": "Calendar description"},
                    "time_zone": {"type": "string", "description": "IANA timezone (e.g. America/New_York)"},
                    "location": {"type": "string", "description": "Geographic location as free-form text"}
                },
                "required": ["summary"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "delete_calendar",
            description: "Delete a secondary calendar",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID to delete"}
                },
                "required": ["calendar_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "clear_calendar",
            description: "Clear a calendar (deletes all events). Typically used for the primary calendar.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID (default: primary)", "default": "primary"}
                },
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "patch_calendar",
            description: "Patch calendar metadata (partial update)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "patch": {"type": "object", "description": "Calendar fields to change"}
                },
                "required": ["calendar_id", "patch"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "update_calendar",
            description: "Update calendar metadata (full replace)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "calendar": {"type": "object", "description": "The full calendar resource"}
                },
                "required": ["calendar_id", "calendar"],
                "additionalProperties": false
            }),
        },
    ]
}

pub async fn list_calendars(client: &GcalClient, _args: &Value) -> Result<Value, String> {
    into_tool_result(calendars::list_calendars(client).await)
}

pub async fn get_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    into_tool_result(calendars::get_calendar(client, calendar_id).await)
}

pub async fn create_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let summary = args["summary"].as_str().ok_or("Missing summary")?;
    let description = args["description"].as_str();
    let time_zone = args["time_zone"].as_str();
    let location = args["location"].as_str();

    into_tool_result(
        calendars::create_calendar(client, summary, description, time_zone, location).await,
    )
}

pub async fn delete_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    into_tool_result(calendars::delete_calendar(client, calendar_id).await)
}

pub async fn clear_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().unwrap_or("primary");
    into_tool_result(calendars::clear_calendar(client, calendar_id).await)
}

pub async fn patch_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let patch = args.get("patch").cloned().ok_or("Missing patch")?;
    into_tool_result(calendars::patch_calendar(client, calendar_id, patch).await)
}

pub async fn update_calendar(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let calendar = args.get("calendar").cloned().ok_or("Missing calendar")?;
    into_tool_result(calendars::update_calendar(client, calendar_id, calendar).await)
}
