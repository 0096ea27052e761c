use serde_json::{Value, json};

use super::{ToolDef, into_tool_result};
use crate::gcal::{GcalClient, events};

pub fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "list_events",
            description: "List events from a calendar",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "Calendar ID (default: primary)", "default": "primary"},
                    "time_min": {"type": "string", "description": "Lower bound for event start time (RFC3339, e.g. 2025-01-15T00:00:00Z)"},
                    "time_max": {"type": "string", "description": "Upper bound for event end time (RFC3339)"},
                    "max_results": {"type": "integer", "description": "Maximum number of events to return (1-2500, default 25)", "default": 25},
                    "single_events": {"type": "boolean", "description": "Expand recurring events into instances (default true)", "default": true},
                    "order_by": {"type": "string", "description": "Sort order when expanding (default startTime)", "default": "startTime"}
                },
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_event",
            description: "Get a specific event by ID",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "event_id": {"type": "string", "description": "The event ID"}
                },
                "required": ["calendar_id", "event_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "search_events",
            description: "Search for events by free-text query",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Free text search terms"},
                    "calendar_id": {"type": "string", "description": "Calendar ID (default: primary)", "default": "primary"},
                    "time_min": {"type": "string", "description": "Lower bound for event start time (RFC3339)"},
                    "time_max": {"type": "string", "description": "Upper bound for event end time (RFC3339)"},
                    "max_results": {"type": "integer", "description": "Maximum number of events to return (1-2500, default 25)", "default": 25}
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "get_event_instances",
            description: "Get instances of a recurring event",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "event_id": {"type": "string", "description": "The recurring event ID"},
                    "time_min": {"type": "string", "description": "Lower bound for instance start time (RFC3339)"},
                    "time_max": {"type": "string", "description": "Upper bound for instance end time (RFC3339)"},
                    "max_results": {"type": "integer", "description": "Maximum number of instances to return (1-2500, default 25)", "default": 25}
                },
                "required": ["calendar_id", "event_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "create_event",
            description: "Create an event",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The target calendar ID"},
                    "event": {"type": "object", "description": "The event resource (summary, start, end, attendees, ...)"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"},
                    "supports_attachments": {"type": "boolean", "description": "Whether the client supports event attachments"}
                },
                "required": ["calendar_id", "event"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "delete_event",
            description: "Delete an event",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "event_id": {"type": "string", "description": "The event ID to delete"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"}
                },
                "required": ["calendar_id", "event_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "patch_event",
            description: "Patch an event (partial update)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "event_id": {"type": "string", "description": "The event ID to patch"},
                    "patch": {"type": "object", "description": "Event fields to change"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"}
                },
                "required": ["calendar_id", "event_id", "patch"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "update_event",
            description: "Update an event (full replace)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID"},
                    "event_id": {"type": "string", "description": "The event ID to update"},
                    "event": {"type": "object", "description": "The full event resource"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"}
                },
                "required": ["calendar_id", "event_id", "event"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "quick_add_event",
            description: "Quick-add an event from a text string",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The target calendar ID"},
                    "text": {"type": "string", "description": "Natural-language event description (e.g. 'Lunch with Sam Friday at noon')"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"}
                },
                "required": ["calendar_id", "text"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "move_event",
            description: "Move an event to another calendar (changes organizer)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "source_calendar_id": {"type": "string", "description": "The calendar the event currently lives on"},
                    "event_id": {"type": "string", "description": "The event ID to move"},
                    "destination_calendar_id": {"type": "string", "description": "The calendar to move the event to"},
                    "send_updates": {"type": "string", "description": "Who receives notifications: all, externalOnly, or none"}
                },
                "required": ["source_calendar_id", "event_id", "destination_calendar_id"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "import_event",
            description: "Import an event (creates a private copy)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The target calendar ID"},
                    "event": {"type": "object", "description": "The event resource (must include iCalUID)"},
                    "supports_attachments": {"type": "boolean", "description": "Whether the client supports event attachments"}
                },
                "required": ["calendar_id", "event"],
                "additionalProperties": false
            }),
        },
        ToolDef {
            name: "watch_events",
            description: "Watch for changes to Events resources (requires webhook endpoint)",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "calendar_id": {"type": "string", "description": "The calendar ID to watch"},
                    "channel": {"type": "object", "description": "Notification channel (id, type, address)"},
                    "time_min": {"type": "string", "description": "Lower bound for event start time (RFC3339)"},
                    "time_max": {"type": "string", "description": "Upper bound for event end time (RFC3339)"},
                    "single_events": {"type": "boolean", "description": "Expand recurring events into instances"}
                },
                "required": ["calendar_id", "channel"],
                "additionalProperties": false
            }),
        },
    ]
}

pub async fn list_events(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().unwrap_or("primary");
    let time_min = args["time_min"].as_str();
    let time_max = args["time_max"].as_str();
    let max_results = args["max_results"].as_i64().unwrap_or(25);
    let single_events = args["single_events"].as_bool().unwrap_or(true);
    let order_by = args["order_by"].as_str().unwrap_or("startTime");

    into_tool_result(
        events::list_events(
            client,
            calendar_id,
            time_min,
            time_max,
            max_results,
            single_events,
            order_by,
        )
        .await,
    )
}

pub async fn get_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    into_tool_result(events::get_event(client, calendar_id, event_id).await)
}

pub async fn search_events(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let query = args["query"].as_str().ok_or("Missing query")?;
    let calendar_id = args["calendar_id"].as_str().unwrap_or("primary");
    let time_min = args["time_min"].as_str();
    let time_max = args["time_max"].as_str();
    let max_results = args["max_results"].as_i64().unwrap_or(25);

    into_tool_result(
        events::search_events(client, query, calendar_id, time_min, time_max, max_results).await,
    )
}

pub async fn get_event_instances(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    let time_min = args["time_min"].as_str();
    let time_max = args["time_max"].as_str();
    let max_results = args["max_results"].as_i64().unwrap_or(25);

    into_tool_result(
        events::event_instances(client, calendar_id, event_id, time_min, time_max, max_results)
            .await,
    )
}

pub async fn create_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event = args.get("event").cloned().ok_or("Missing event")?;
    let send_updates = args["send_updates"].as_str();
    let supports_attachments = args["supports_attachments"].as_bool();

    into_tool_result(
        events::create_event(client, calendar_id, event, send_updates, supports_attachments).await,
    )
}

pub async fn delete_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    let send_updates = args["send_updates"].as_str();

    into_tool_result(events::delete_event(client, calendar_id, event_id, send_updates).await)
}

pub async fn patch_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    let patch = args.get("patch").cloned().ok_or("Missing patch")?;
    let send_updates = args["send_updates"].as_str();

    into_tool_result(events::patch_event(client, calendar_id, event_id, patch, send_updates).await)
}

pub async fn update_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    let event = args.get("event").cloned().ok_or("Missing event")?;
    let send_updates = args["send_updates"].as_str();

    into_tool_result(events::update_event(client, calendar_id, event_id, event, send_updates).await)
}

pub async fn quick_add_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let text = args["text"].as_str().ok_or("Missing text")?;
    let send_updates = args["send_updates"].as_str();

    into_tool_result(events::quick_add_event(client, calendar_id, text, send_updates).await)
}

pub async fn move_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let source_calendar_id = args["source_calendar_id"]
        .as_str()
        .ok_or("Missing source_calendar_id")?;
    let event_id = args["event_id"].as_str().ok_or("Missing event_id")?;
    let destination_calendar_id = args["destination_calendar_id"]
        .as_str()
        .ok_or("Missing destination_calendar_id")?;
    let send_updates = args["send_updates"].as_str();

    into_tool_result(
        events::move_event(
            client,
            source_calendar_id,
            event_id,
            destination_calendar_id,
            send_updates,
        )
        .await,
    )
}

pub async fn import_event(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let event = args.get("event").cloned().ok_or("Missing event")?;
    let supports_attachments = args["supports_attachments"].as_bool();

    into_tool_result(events::import_event(client, calendar_id, event, supports_attachments).await)
}

pub async fn watch_events(client: &GcalClient, args: &Value) -> Result<Value, String> {
    let calendar_id = args["calendar_id"].as_str().ok_or("Missing calendar_id")?;
    let channel = args.get("channel").cloned().ok_or("Missing channel")?;
    let time_min = args["time_min"].as_str();
    let time_max = args["time_max"].as_str();
    let single_events = args["single_events"].as_bool();

    into_tool_result(
        events::watch_events(client, calendar_id, channel, time_min, time_max, single_events)
            .await,
    )
}
