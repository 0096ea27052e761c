//! Events collection: listing, searching, CRUD, quick-add, move, import,
//! recurring-event instances, and watch channels.

use serde_json::Value;

use super::client::{ApiResult, GcalClient};
use super::dispatch::HttpMethod;
use super::query::{QueryParams, clamp_max_results};

/// List events from a calendar.
///
/// `orderBy` is only valid when expanding recurring events, so it is sent
/// only when `single_events` is true.
pub async fn list_events(
    client: &GcalClient,
    calendar_id: &str,
    time_min: Option<&str>,
    time_max: Option<&str>,
    max_results: i64,
    single_events: bool,
    order_by: &str,
) -> ApiResult {
    let max_results = clamp_max_results(max_results);

    let mut params = QueryParams::new();
    params
        .set("maxResults", max_results.to_string())
        .set_flag("singleEvents", single_events)
        .set_opt("timeMin", time_min)
        .set_opt("timeMax", time_max);
    if single_events {
        params.set("orderBy", order_by);
    }

    client
        .request(
            HttpMethod::Get,
            format!("/calendars/{calendar_id}/events"),
            Some(params),
            None,
        )
        .await
}

/// Get a specific event by ID.
pub async fn get_event(client: &GcalClient, calendar_id: &str, event_id: &str) -> ApiResult {
    client
        .request(
            HttpMethod::Get,
            format!("/calendars/{calendar_id}/events/{event_id}"),
            None,
            None,
        )
        .await
}

/// Search for events by free-text query. Always expands recurring events
/// and orders by start time.
pub async fn search_events(
    client: &GcalClient,
    query: &str,
    calendar_id: &str,
    time_min: Option<&str>,
    time_max: Option<&str>,
    max_results: i64,
) -> ApiResult {
    let max_results = clamp_max_results(max_results);

    let mut params = QueryParams::new();
    params
        .set("q", query)
        .set("maxResults", max_results.to_string())
        .set("singleEvents", "true")
        .set("orderBy", "startTime")
        .set_opt("timeMin", time_min)
        .set_opt("timeMax", time_max);

    client
        .request(
            HttpMethod::Get,
            format!("/calendars/{calendar_id}/events"),
            Some(params),
            None,
        )
        .await
}

/// Get instances of a recurring event.
pub async fn event_instances(
    client: &GcalClient,
    calendar_id: &str,
    event_id: &str,
    time_min: Option<&str>,
    time_max: Option<&str>,
    max_results: i64,
) -> ApiResult {
    let max_results = clamp_max_results(max_results);

    let mut params = QueryParams::new();
    params
        .set("maxResults", max_results.to_string())
        .set_opt("timeMin", time_min)
        .set_opt("timeMax", time_max);

    client
        .request(
            HttpMethod::Get,
            format!("/calendars/{calendar_id}/events/{event_id}/instances"),
            Some(params),
            None,
        )
        .await
}

/// Create an event.
pub async fn create_event(
    client: &GcalClient,
    calendar_id: &str,
    event: Value,
    send_updates: Option<&str>,
    supports_attachments: Option<bool>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params
        .set_opt("sendUpdates", send_updates)
        .set_opt_flag("supportsAttachments", supports_attachments);

    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{calendar_id}/events"),
            Some(params),
            Some(event),
        )
        .await
}

/// Delete an event.
pub async fn delete_event(
    client: &GcalClient,
    calendar_id: &str,
    event_id: &str,
    send_updates: Option<&str>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params.set_opt("sendUpdates", send_updates);

    client
        .request(
            HttpMethod::Delete,
            format!("/calendars/{calendar_id}/events/{event_id}"),
            Some(params),
            None,
        )
        .await
}

/// Patch an event (partial update).
pub async fn patch_event(
    client: &GcalClient,
    calendar_id: &str,
    event_id: &str,
    patch: Value,
    send_updates: Option<&str>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params.set_opt("sendUpdates", send_updates);

    client
        .request(
            HttpMethod::Patch,
            format!("/calendars/{calendar_id}/events/{event_id}"),
            Some(params),
            Some(patch),
        )
        .await
}

/// Update an event (full replace).
pub async fn update_event(
    client: &GcalClient,
    calendar_id: &str,
    event_id: &str,
    event: Value,
    send_updates: Option<&str>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params.set_opt("sendUpdates", send_updates);

    client
        .request(
            HttpMethod::Put,
            format!("/calendars/{calendar_id}/events/{event_id}"),
            Some(params),
            Some(event),
        )
        .await
}

/// Quick-add an event from a natural-language text string.
pub async fn quick_add_event(
    client: &GcalClient,
    calendar_id: &str,
    text: &str,
    send_updates: Option<&str>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params.set("text", text).set_opt("sendUpdates", send_updates);

    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{calendar_id}/events/quickAdd"),
            Some(params),
            None,
        )
        .await
}

/// Move an event to another calendar. Changes the event's organizer.
pub async fn move_event(
    client: &GcalClient,
    source_calendar_id: &str,
    event_id: &str,
    destination_calendar_id: &str,
    send_updates: Option<&str>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params
        .set("destination", destination_calendar_id)
        .set_opt("sendUpdates", send_updates);

    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{source_calendar_id}/events/{event_id}/move"),
            Some(params),
            None,
        )
        .await
}

/// Import an event — creates a private copy on the target calendar.
pub async fn import_event(
    client: &GcalClient,
    calendar_id: &str,
    event: Value,
    supports_attachments: Option<bool>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params.set_opt_flag("supportsAttachments", supports_attachments);

    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{calendar_id}/events/import"),
            Some(params),
            Some(event),
        )
        .await
}

/// Watch for changes to Events resources. Requires a webhook endpoint.
pub async fn watch_events(
    client: &GcalClient,
    calendar_id: &str,
    channel: Value,
    time_min: Option<&str>,
    time_max: Option<&str>,
    single_events: Option<bool>,
) -> ApiResult {
    let mut params = QueryParams::new();
    params
        .set_opt("timeMin", time_min)
        .set_opt("timeMax", time_max)
        .set_opt_flag("singleEvents", single_events);

    client
        .request(
            HttpMethod::Post,
            format!("/calendars/{calendar_id}/events/watch"),
            Some(params),
            Some(channel),
        )
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::gcal::testing::{MockDispatch, split_query};

    fn client_with(mock: &Arc<MockDispatch>) -> GcalClient {
        GcalClient::new(mock.clone())
    }

    #[tokio::test]
    async fn test_list_events_query_shape() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"items": []})));
        list_events(
            &client_with(&mock),
            "primary",
            Some("2025-01-01T00:00:00Z"),
            None,
            10,
            true,
            "startTime",
        )
        .await;

        let requests = mock.requests();
        let (path, query) = split_query(&requests[0].path);
        assert_eq!(path, "/calendars/primary/events");
        assert_eq!(query.len(), 4);
        assert_eq!(query.get("maxResults").unwrap(), "10");
        assert_eq!(query.get("singleEvents").unwrap(), "true");
        assert_eq!(query.get("timeMin").unwrap(), "2025-01-01T00:00:00Z");
        assert_eq!(query.get("orderBy").unwrap(), "startTime");
    }

    #[tokio::test]
    async fn test_list_events_clamps_max_results() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"items": []})));
        let client = client_with(&mock);

        list_events(&client, "primary", None, None, 0, true, "startTime").await;
        list_events(&client, "primary", None, None, 5000, true, "startTime").await;
        list_events(&client, "primary", None, None, 100, true, "startTime").await;

        let reqs = mock.requests();
        assert_eq!(split_query(&reqs[0].path).1.get("maxResults").unwrap(), "1");
        assert_eq!(split_query(&reqs[1].path).1.get("maxResults").unwrap(), "2500");
        assert_eq!(split_query(&reqs[2].path).1.get("maxResults").unwrap(), "100");
    }

    #[tokio::test]
    async fn test_list_events_omits_order_by_without_expansion() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"items": []})));
        list_events(&client_with(&mock), "primary", None, None, 25, false, "startTime").await;

        let (_, query) = split_query(&mock.requests()[0].path);
        assert_eq!(query.get("singleEvents").unwrap(), "false");
        assert!(!query.contains_key("orderBy"));
    }

    #[tokio::test]
    async fn test_search_events_forces_expansion_and_ordering() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"items": []})));
        search_events(&client_with(&mock), "standup", "primary", None, None, 25).await;

        let requests = mock.requests();
        let (path, query) = split_query(&requests[0].path);
        assert_eq!(path, "/calendars/primary/events");
        assert_eq!(query.get("q").unwrap(), "standup");
        assert_eq!(query.get("singleEvents").unwrap(), "true");
        assert_eq!(query.get("orderBy").unwrap(), "startTime");
        assert_eq!(query.get("maxResults").unwrap(), "25");
    }

    #[tokio::test]
    async fn test_create_event_omits_unset_send_updates() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"id": "evt1"})));
        create_event(
            &client_with(&mock),
            "primary",
            json!({"summary": "Standup"}),
            None,
            None,
        )
        .await;

        let req = &mock.requests()[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/calendars/primary/events");
        assert_eq!(req.body, Some(json!({"summary": "Standup"})));
    }

    #[tokio::test]
    async fn test_create_event_flag_serializes_lowercase() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        create_event(
            &client_with(&mock),
            "primary",
            json!({"summary": "Standup"}),
            Some("all"),
            Some(true),
        )
        .await;

        let path = &mock.requests()[0].path;
        assert!(path.contains("supportsAttachments=true"));
        assert!(!path.contains("True"));
        let (_, query) = split_query(path);
        assert_eq!(query.get("sendUpdates").unwrap(), "all");
    }

    #[tokio::test]
    async fn test_delete_event_with_send_updates() {
        let mock = Arc::new(MockDispatch::succeeding(json!(null)));
        delete_event(&client_with(&mock), "primary", "evt1", Some("externalOnly")).await;

        let req = &mock.requests()[0];
        assert_eq!(req.method, HttpMethod::Delete);
        let (path, query) = split_query(&req.path);
        assert_eq!(path, "/calendars/primary/events/evt1");
        assert_eq!(query.get("sendUpdates").unwrap(), "externalOnly");
    }

    #[tokio::test]
    async fn test_quick_add_encodes_text() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        quick_add_event(&client_with(&mock), "primary", "Lunch with Sam at noon", None).await;

        let req = &mock.requests()[0];
        let (path, query) = split_query(&req.path);
        assert_eq!(path, "/calendars/primary/events/quickAdd");
        assert_eq!(query.get("text").unwrap(), "Lunch with Sam at noon");
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn test_move_event_sets_destination() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        move_event(&client_with(&mock), "primary", "evt1", "team@example.com", None).await;

        let requests = mock.requests();
        let (path, query) = split_query(&requests[0].path);
        assert_eq!(path, "/calendars/primary/events/evt1/move");
        assert_eq!(query.get("destination").unwrap(), "team@example.com");
    }

    #[tokio::test]
    async fn test_event_instances_path_and_clamp() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"items": []})));
        event_instances(&client_with(&mock), "primary", "evt1", None, None, 9999).await;

        let requests = mock.requests();
        let (path, query) = split_query(&requests[0].path);
        assert_eq!(path, "/calendars/primary/events/evt1/instances");
        assert_eq!(query.get("maxResults").unwrap(), "2500");
        assert!(!query.contains_key("timeMin"));
    }

    #[tokio::test]
    async fn test_import_event_posts_body() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        import_event(
            &client_with(&mock),
            "primary",
            json!({"iCalUID": "abc@example.com"}),
            Some(false),
        )
        .await;

        let req = &mock.requests()[0];
        let (path, query) = split_query(&req.path);
        assert_eq!(path, "/calendars/primary/events/import");
        assert_eq!(query.get("supportsAttachments").unwrap(), "false");
        assert_eq!(req.body.as_ref().unwrap()["iCalUID"], "abc@example.com");
    }

    #[tokio::test]
    async fn test_watch_events_combines_params_and_channel() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        watch_events(
            &client_with(&mock),
            "primary",
            json!({"id": "chan-1"}),
            Some("2025-01-01T00:00:00Z"),
            None,
            Some(true),
        )
        .await;

        let req = &mock.requests()[0];
        let (path, query) = split_query(&req.path);
        assert_eq!(path, "/calendars/primary/events/watch");
        assert_eq!(query.get("timeMin").unwrap(), "2025-01-01T00:00:00Z");
        assert_eq!(query.get("singleEvents").unwrap(), "true");
        assert!(!query.contains_key("timeMax"));
        assert_eq!(req.body, Some(json!({"id": "chan-1"})));
    }
}
