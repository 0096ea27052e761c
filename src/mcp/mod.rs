mod auth;
mod handlers;
mod jsonrpc;
mod session;
pub mod tools;
mod transport;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;

use crate::gcal::GcalClient;
use session::SessionManager;
use transport::McpState;

/// Build the MCP router. `bearer_token` enables static inbound auth when set.
pub fn router(client: GcalClient, bearer_token: Option<String>) -> Router {
    let state = McpState {
        client,
        sessions: SessionManager::new(),
    };

    Router::new()
        .route("/mcp", post(transport::handle_post))
        .route("/mcp", get(transport::handle_get))
        .route("/mcp", delete(transport::handle_delete))
        .layer(middleware::from_fn_with_state(
            bearer_token,
            auth::require_bearer_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
