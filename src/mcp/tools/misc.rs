use serde_json::{Value, json};

use super::{ToolDef, into_tool_result};
use crate::gcal::{GcalClient, misc};

pub fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "get_freebusy",
            description: "Query free/busy information for calendars",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "time_min": {"type": "string", "description": "Start of the interval (RFC3339)"},
                    "time_max": {"type": "string", "description": "End of the interval (RFC3339)"},
                    "calendar_ids": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Calendar IDs to query (default: [\"primary\"])"
                    },
                    "time_zone": {"type": "string", "description": "Timezone for the response (default UTC)"}
                },
                "required": ["time_min", "time_max"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_settings",
            description: "Get all of the user's calendar settings",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_setting",
            description: "Get a specific calendar setting",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "setting_id": {"type": "string", "description": "The setting ID (e.g. timezone, weekStart)"}
                },
                "required": ["setting_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "watch_settings",
            description: "Watch for changes to Settings resources (requires webhook endpoint)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel": {"type": "object", "description": "Notification channel (id, type, address)"}
                },
                "required": ["channel"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_colors",
            description: "Get available calendar and event colors",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "stop_channel",
            description: "Stop watching a notification channel (channels.stop)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel": {"type": "object", "description": "The channel to stop (id and resourceId)"}
                },
                "required": ["channel"],
                "additionalProperties": false
            }),
        },
    ]
}

pub async fn get_freebusy(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let time_min = args["time_min"].as_str().ok_or("Missing time_min")?;
    let time_max = args["time_max"].as_str().ok_or("Missing time_max")?;
    let time_zone = args["time_zone"].as_str();

    // Silent "primary" default, matching the calendar_id ergonomics.
    let calendar_ids: Vec<String> = match args["calendar_ids"].as_array() {
        Some(ids) => ids
            .iter()
            .map(|v| v.as_str().map(str::to_string).ok_or("calendar_ids must be strings"))
            .collect::<Result<_, _>>()?,
        None => vec!["primary".to_string()],
    };

    into_tool_result(
        misc::query_freebusy(client, time_min, time_max, &calendar_ids, time_zone).await,
    )
}

pub async fn get_settings(client: &GcalClient, _args: &Value) -> Result<Value, String> {
    into_tool_result(misc::list_settings(client).await)
}

pub async fn get_setting(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let setting_id = args["setting_id"].as_str().ok_or("Missing setting_id")?;
    into_tool_result(misc::get_setting(client, setting_id).await)
}

pub async fn watch_settings(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let channel = args.get("channel").cloned().ok_or("Missing channel")?;
    into_tool_result(misc::watch_settings(client, channel).await)
}

pub async fn get_colors(client: &GcalClient, _args: &Value) -> Result<Value, String> {
    into_tool_result(misc::get_colors(client).await)
}

pub async fn stop_channel(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let channel = args.get("channel").cloned().ok_or("Missing channel")?;
    into_tool_result(misc::stop_channel(client, channel).await)
}
