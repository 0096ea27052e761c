//! Calendars collection: metadata CRUD for the calendars themselves.

use serde_json::{Map, Value, json};

use super::client::{ApiResult, GcalClient};
use super::dispatch::HttpMethod;
use super::query::QueryParams;

/// List all calendars accessible by the user.
pub async fn list_calendars(client: &GcalClient) -> ApiResult {
    let mut params = QueryParams::new();
    params.set("minAccessRole", "reader");
    client
        .request(
            HttpMethod::Get,
            "/users/me/calendarList".to_string(),
            Some(params),
            None,
        )
        .await
}

/// Get details of a specific calendar.
pub async fn get_calendar(client: &GcalClient, calendar_id: &str) -> ApiResult {
    client
        .request(HttpMethod::Get, format!("/calendars/{calendar_id}"), None, None)
        .await
}

/// Create a secondary calendar. Only the supplied fields go on the wire.
pub async fn create_calendar(
    client: &GcalClient,
    summary: &str,
    description: Option<&str>,
    time_zone: Option<&str>,
    location: Option<&str>,
) -> ApiResult {
    let mut body = Map::new();
    body.insert("summary".to_string(), json!(summary));
    if let Some(d) = description {
        body.insert("description".to_string(), json!(d));
    }
    if let Some(tz) = time_zone {
        body.insert("timeZone".to_string(), json!(tz));
    }
    if let Some(l) = location {
        body.insert("location".to_string(), json!(l));
    }

    client
        .request(
            HttpMethod::Post,
            "/calendars".to_string(),
            None,
            Some(Value::Object(body)),
        )
        .await
}

/// Delete a secondary calendar.
pub async fn delete_calendar(client: &GcalClient, calendar_id: &str) -> ApiResult {
    client
        .request(HttpMethod::Delete, format!("/calendars/{calendar_id}"), None, None)
        .await
}

/// Clear a calendar — deletes all its events. Primary calendar only on the
/// Google side.
pub async fn clear_calendar(client: &GcalClient, calendar_id: &str) -> ApiResult {
    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{calendar_id}/clear"),
            None,
            None,
        )
        .await
}

/// Patch calendar metadata (partial update).
pub async fn patch_calendar(client: &GcalClient, calendar_id: &str, patch: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Patch,
            format!("/calendars/{calendar_id}"),
            None,
            Some(patch),
        )
        .await
}

/// Update calendar metadata (full replace).
pub async fn update_calendar(client: &GcalClient, calendar_id: &str, calendar: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Put,
            format!("/calendars/{calendar_id}"),
            None,
            Some(calendar),
        )
        .await
}
