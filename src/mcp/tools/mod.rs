pub mod calendar_list;
pub mod calendars;
pub mod events;
pub mod misc;

use serde_json::Value;

use crate::gcal::{ApiResult, GcalClient};

/// A tool definition for the MCP tools/list response.
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Get all registered MCP tool definitions.
pub fn all_tools() -> Vec<ToolDef> {
    let mut tools = Vec::new();
    tools.extend(calendars::tool_defs());
    tools.extend(calendar_list::tool_defs());
    tools.extend(events::tool_defs());
    tools.extend(misc::tool_defs());
    tools
}

/// Dispatch a tools/call request to the appropriate handler.
pub async fn dispatch(client: &GcalClient, tool_name: &str, args: &Value) -> Result<Value, String> {
    match tool_name {
        "list_calendars" => calendars::list_calendars(client, args).await,
        "get_calendar" => calendars::get_calendar(client, args).await,
        "create_calendar" => calendars::create_calendar(client, args).await,
        "delete_calendar" => calendars::delete_calendar(client, args).await,
        "clear_calendar" => calendars::clear_calendar(client, args).await,
        "patch_calendar" => calendars::patch_calendar(client, args).await,
        "update_calendar" => calendars::update_calendar(client, args).await,
        "get_calendar_list_entry" => calendar_list::get_entry(client, args).await,
        "insert_calendar_list_entry" => calendar_list::insert_entry(client, args).await,
        "remove_calendar_list_entry" => calendar_list::remove_entry(client, args).await,
        "patch_calendar_list_entry" => calendar_list::patch_entry(client, args).await,
        "update_calendar_list_entry" => calendar_list::update_entry(client, args).await,
        "watch_calendar_list" => calendar_list::watch(client, args).await,
        "list_events" => events::list_events(client, args).await,
        "get_event" => events::get_event(client, args).await,
        "search_events" => events::search_events(client, args).await,
        "get_event_instances" => events::get_event_instances(client, args).await,
        "create_event" => events::create_event(client, args).await,
        "delete_event" => events::delete_event(client, args).await,
        "patch_event" => events::patch_event(client, args).await,
        "update_event" => events::update_event(client, args).await,
        "quick_add_event" => events::quick_add_event(client, args).await,
        "move_event" => events::move_event(client, args).await,
        "import_event" => events::import_event(client, args).await,
        "watch_events" => events::watch_events(client, args).await,
        "get_freebusy" => misc::get_freebusy(client, args).await,
        "get_settings" => misc::get_settings(client, args).await,
        "get_setting" => misc::get_setting(client, args).await,
        "watch_settings" => misc::watch_settings(client, args).await,
        "get_colors" => misc::get_colors(client, args).await,
        "stop_channel" => misc::stop_channel(client, args).await,
        _ => Err(format!("Unknown tool: {tool_name}")),
    }
}

/// Unwrap the uniform result envelope into the MCP tool contract: success
/// data becomes the structured content, failure messages become isError
/// text.
pub(super) fn into_tool_result(result: ApiResult) -> Result<Value, String> {
    if result.success {
        Ok(result.data.unwrap_or(Value::Null))
    } else {
        Err(result.error.unwrap_or_else(|| "Request failed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_are_unique_and_complete() {
        let tools = all_tools();
        assert_eq!(tools.len(), 31);

        let mut names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 31, "tool names must be unique");
    }

    #[test]
    fn test_every_tool_has_an_object_schema() {
        for tool in all_tools() {
            assert_eq!(
                tool.input_schema["type"], "object",
                "{} schema must be an object",
                tool.name
            );
            assert!(!tool.description.is_empty());
        }
    }

    #[test]
    fn test_into_tool_result_unwraps_envelope() {
        let ok = into_tool_result(ApiResult::ok(serde_json::json!({"id": "x"})));
        assert_eq!(ok.unwrap()["id"], "x");

        let err = into_tool_result(ApiResult::err("boom"));
        assert_eq!(err.unwrap_err(), "boom");
    }
}
