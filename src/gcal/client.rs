use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::connection::{CONNECTION_NAME, Connection};
use super::dispatch::{Dispatch, DispatchOutcome, HttpDispatcher, HttpMethod, HttpRequest};
use super::query::QueryParams;
use crate::config::Config;

/// Uniform result envelope every Calendar operation returns.
///
/// Exactly one of `data` / `error` is populated: success carries the
/// response body verbatim, failure carries a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResult {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Shared handle the endpoint functions call through. Cheap to clone; the
/// dispatcher behind it is the only stateful piece and it is read-only.
#[derive(Clone)]
pub struct GcalClient {
    dispatcher: Arc<dyn Dispatch>,
}

impl GcalClient {
    pub fn new(dispatcher: Arc<dyn Dispatch>) -> Self {
        Self { dispatcher }
    }

    /// Build a client backed by the real authenticated HTTP dispatcher.
    pub fn connect(config: &Config) -> Self {
        let connection = Connection::from_config(config);
        Self::new(Arc::new(HttpDispatcher::new(connection)))
    }

    /// Make a Calendar API request and normalize the outcome.
    ///
    /// Remote failures (4xx/5xx) come back as `success: false` results,
    /// never as panics or errors — callers always get a well-formed
    /// envelope.
    pub(crate) async fn request(
        &self,
        method: HttpMethod,
        path: String,
        params: Option<QueryParams>,
        body: Option<Value>,
    ) -> ApiResult {
        let mut path = path;
        if let Some(params) = params {
            let query_string = params.encode();
            if !query_string.is_empty() {
                path = format!("{path}?{query_string}");
            }
        }

        tracing::debug!(%method, %path, "Calendar API request");

        let request = HttpRequest { method, path, body };
        match self.dispatcher.dispatch(CONNECTION_NAME, request).await {
            DispatchOutcome::Success { body } => ApiResult::ok(body),
            DispatchOutcome::Failure(error) => {
                let msg = error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "Request failed".to_string());
                ApiResult::err(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::gcal::testing::MockDispatch;

    #[tokio::test]
    async fn test_success_passes_body_through_verbatim() {
        let mock = Arc::new(MockDispatch::succeeding(json!({"kind": "calendar#events", "items": [1, 2]})));
        let client = GcalClient::new(mock.clone());

        let result = client
            .request(HttpMethod::Get, "/colors".to_string(), None, None)
            .await;

        assert!(result.success);
        assert_eq!(result.data, Some(json!({"kind": "calendar#events", "items": [1, 2]})));
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_failure_surfaces_exact_message() {
        let mock = Arc::new(MockDispatch::failing("Not Found"));
        let client = GcalClient::new(mock);

        let result = client
            .request(HttpMethod::Get, "/calendars/nope".to_string(), None, None)
            .await;

        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.error.as_deref(), Some("Not Found"));
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_generic_message() {
        let mock = Arc::new(MockDispatch::failing_without_message());
        let client = GcalClient::new(mock);

        let result = client
            .request(HttpMethod::Get, "/colors".to_string(), None, None)
            .await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Request failed"));
    }

    #[tokio::test]
    async fn test_query_string_is_appended() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        let client = GcalClient::new(mock.clone());

        let mut params = QueryParams::new();
        params.set("maxResults", "10").set_flag("singleEvents", true);
        client
            .request(
                HttpMethod::Get,
                "/calendars/primary/events".to_string(),
                Some(params),
                None,
            )
            .await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].path,
            "/calendars/primary/events?maxResults=10&singleEvents=true"
        );
    }

    #[tokio::test]
    async fn test_empty_params_leave_path_untouched() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        let client = GcalClient::new(mock.clone());

        let mut params = QueryParams::new();
        params.set_opt("timeMin", None);
        client
            .request(HttpMethod::Get, "/colors".to_string(), Some(params), None)
            .await;

        assert_eq!(mock.requests()[0].path, "/colors");
    }

    #[tokio::test]
    async fn test_dispatch_receives_connection_name() {
        let mock = Arc::new(MockDispatch::succeeding(json!({})));
        let client = GcalClient::new(mock.clone());

        client
            .request(HttpMethod::Get, "/colors".to_string(), None, None)
            .await;

        assert_eq!(mock.connections(), vec![CONNECTION_NAME.to_string()]);
    }

    #[test]
    fn test_envelope_serialization_skips_absent_fields() {
        let ok = serde_json::to_value(ApiResult::ok(json!({"id": "x"}))).unwrap();
        assert_eq!(ok, json!({"success": true, "data": {"id": "x"}}));

        let err = serde_json::to_value(ApiResult::err("boom")).unwrap();
        assert_eq!(err, json!({"success": false, "error": "boom"}));
    }
}
