use serde_json::{Value, json};

use super::{ToolDef, into_tool_result};
use crate::gcal::{GcalClient, calendar_list};

pub fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "get_calendar_list_entry",
            description: "Get a calendar list entry",
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
            name: "insert_calendar_list_entry",
            description: "Insert an existing calendar into the user's calendar list",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "entry": {"type": "object", "description": "The calendar list entry (must include id)"}
                },
                "required": ["entry"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "remove_calendar_list_entry",
            description: "Remove a calendar from the user's calendar list",
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
            name: "patch_calendar_list_entry",
            description: "Patch a calendar list entry (partial update)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "patch": {"type": "object", "description": "Entry fields to change (e.g. colorId, hidden)"}
                },
                "required": ["calendar_id", "patch"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "update_calendar_list_entry",
            description: "Update a calendar list entry (full replace)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "entry": {"type": "object", "description": "The full calendar list entry"}
                },
                "required": ["calendar_id", "entry"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "watch_calendar_list",
            description: "Watch for changes to CalendarList resources (requires webhook endpoint)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel": {"type": "object", "description": "Notification channel (id, type, address)"}
                },
                "required": ["channel"],
                "additionalProperties": false
            }),
        },
    ]
}

pub async fn get_entry(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    into_tool_result(calendar_list::get_entry(client, calendar_id).await)
}

pub async fn insert_entry(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let entry = args.get("entry").cloned().ok_or("Missing entry")?;
    into_tool_result(calendar_list::insert_entry(client, entry).await)
}

pub async fn remove_entry(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    into_tool_result(calendar_list::delete_entry(client, calendar_id).await)
}

pub async fn patch_entry(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let patch = args.get("patch").cloned().ok_or("Missing patch")?;
    into_tool_result(calendar_list::patch_entry(client, calendar_id, patch).await)
}

pub async fn update_entry(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let entry = args.get("entry").cloned().ok_or("Missing entry")?;
    into_tool_result(calendar_list::update_entry(client, calendar_id, entry).await)
}

pub async fn watch(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let channel = args.get("channel").cloned().ok_or("Missing channel")?;
    into_tool_result(calendar_list::watch(client, channel).await)
}
