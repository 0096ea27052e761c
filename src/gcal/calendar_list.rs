//! CalendarList collection: the user's view of which calendars they have
//! added, as opposed to the calendars themselves.

use serde_json::Value;

use super::client::{ApiResult, GcalClient};
use super::dispatch::HttpMethod;

/// Get a calendar list entry.
pub async fn get_entry(client: &GcalClient, calendar_id: &str) -> ApiResult {
    client
        .request(
            HttpMethod::Get,
            format!("/users/me/calendarList/{calendar_id}"),
            None,
            None,
        )
        .await
}

/// Insert an existing calendar into the user's calendar list.
pub async fn insert_entry(client: &GcalClient, entry: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Post,
            "/users/me/calendarList".to_string(),
            None,
            Some(entry),
        )
        .await
}

/// Remove a calendar from the user's calendar list.
pub async fn delete_entry(client: &GcalClient, calendar_id: &str) -> ApiResult {
    client
        .request(
            HttpMethod::Delete,
            format!("/users/me/calendarList/{calendar_id}"),
            None,
            None,
        )
        .await
}

/// Patch a calendar list entry (partial update).
pub async fn patch_entry(client: &GcalClient, calendar_id: &str, patch: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Patch,
            format!("/users/me/calendarList/{calendar_id}"),
            None,
            Some(patch),
        )
        .await
}

/// Update a calendar list entry (full replace).
pub async fn update_entry(client: &GcalClient, calendar_id: &str, entry: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Put,
            format!("/users/me/calendarList/{calendar_id}"),
            None,
            Some(entry),
        )
        .await
}

/// Watch for changes to CalendarList resources. Requires a webhook
/// endpoint reachable by Google.
pub async fn watch(client: &GcalClient, channel: Value) -> ApiResult {
    client
        .request(
            HttpMethod::Post,
            "/users/me/calendarList/watch".to_string(),
            None,
            Some(channel),
        )
        .await
}
