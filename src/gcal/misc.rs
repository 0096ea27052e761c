//! Freebusy queries, user settings, the color palette, and channel stop.

use serde_json::{Map, Value, json};

use super::client::{ApiResult, GcalClient};
use super::dispatch::HttpMethod;

/// Query free/busy information for a set of calendars.
pub async fn query_freebusy(
    client: &GcalClient,
    time_min: &str,
    time_max: &str,
    calendar_ids: &[String],
    time_zone: Option<&str>,
) -> ApiResult {
    let items: Vec<Value> = calendar_ids.iter().map(|id| json!({"id": id})).collect();

    let mut body = Map::new();
    body.insert("timeMin".to_string(), json!(time_min));
    body.insert("timeMax".to_string(), json!(time_max));
    body.insert("items".to_string(), Value::Array(items));
    if let Some(tz) = time_zone {
        body.insert("timeZone".to_string(), json!(tz));
    }

    client
        .request(
            HttpMethod::Post,
            "/freeBusy".to_string(),
            None,
            Some(Value::Object(body)),
        )
        .await
}

/// Get all of the user's calendar settings.
pub async fn list_settings(client: &GcalClient) -> ApiResult {
    client
        .request(HttpMethod::Get, "/users/me/settings".to_string(), None, None)
        .await
}

/// Get a single calendar setting.
pub async fn get_setting(client: &GcalClient, setting_id: &str) -> ApiResult {
    client
        .request(
            HttpMethod::Get,
            format!("/users/me/settings/{setting_id}"),
            None,
            None,
        )
        .await
}

/// Watch for changes to Settings resources.
pub async fn watch_settings(client: &GcalClient, channel: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Post,
            "/users/me/settings/watch".to_string(),
            None,
            Some(channel),
        )
        .await
}

/// Get the available calendar and event colors.
pub async fn get_colors(client: &GcalClient) -> ApiResult {
    client
        .request(HttpMethod::Get, "/colors".to_string(), None, None)
        .await
}

/// Stop watching a notification channel.
pub async fn stop_channel(client: &GcalClient, channel: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Post,
            "/channels/stop".to_string(),
            None,
            Some(channel),
        )
        .await
}
