use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};

/// Middleware requiring a static Bearer token for MCP requests. When no
/// token is configured the server is open and requests pass through.
pub async fn require_bearer_auth(
    State(expected): State<Option<String>>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(expected) = expected else {
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized_response("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized_response("Invalid authorization scheme, expected Bearer"))?;

    if token != expected {
        return Err(unauthorized_response("Invalid token"));
    }

    Ok(next.run(request).await)
}

fn unauthorized_response(msg: &str) -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::WWW_AUTHENTICATE, "Bearer realm=\"gcal-mcp\"")
        .body(axum::body::Body::from(msg.to_string()))
        .unwrap()
}
