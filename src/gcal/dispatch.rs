use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::connection::Connection;

/// HTTP methods the Calendar API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single outbound request, built fresh per call and discarded after
/// dispatch. The path is API-relative and already carries the query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// Error detail attached to a failed dispatch.
#[derive(Debug, Clone)]
pub struct DispatchError {
    pub message: String,
}

/// What the dispatch capability hands back: the response body on success,
/// or an optional error detail on failure.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    Success { body: Value },
    Failure(Option<DispatchError>),
}

/// The authenticated transport seam. Implementations own credential
/// injection, the network call, and transport-level errors; callers never
/// see the token. One call in, one outcome out — no retries here.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, connection: &str, request: HttpRequest) -> DispatchOutcome;
}

/// Production dispatcher over reqwest, bound to one connection descriptor.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    connection: Connection,
}

impl HttpDispatcher {
    pub fn new(connection: Connection) -> Self {
        Self {
            client: reqwest::Client::new(),
            connection,
        }
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, connection: &str, request: HttpRequest) -> DispatchOutcome {
        if connection != self.connection.name {
            return DispatchOutcome::Failure(Some(DispatchError {
                message: format!("Unknown connection: {connection}"),
            }));
        }

        let url = format!("{}{}", self.connection.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header(reqwest::header::AUTHORIZATION, self.connection.auth_header());

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%url, "Transport error: {e}");
                return DispatchOutcome::Failure(Some(DispatchError {
                    message: format!("Transport error: {e}"),
                }));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                return DispatchOutcome::Failure(Some(DispatchError {
                    message: format!("Failed to read response body: {e}"),
                }));
            }
        };

        // DELETE and clear return no content
        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if status.is_success() {
            return DispatchOutcome::Success { body };
        }

        // Google wraps failures as {"error": {"code": ..., "message": ...}}
        let message = body
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}"));

        tracing::debug!(%status, %url, "Calendar API request failed");
        DispatchOutcome::Failure(Some(DispatchError { message }))
    }
}
