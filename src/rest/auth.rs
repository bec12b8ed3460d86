// rest/auth.rs — optional HTTP Basic Authentication gate.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;
use std::sync::Arc;

use crate::config::BasicAuth;
use crate::AppContext;

/// Rejects requests that lack valid credentials before any route runs.
/// A no-op when no credential pair is configured.
pub async fn require_basic_auth(
    State(ctx): State<Arc<AppContext>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = ctx.config.auth.as_ref() else {
        return next.run(req).await;
    };

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| credentials_match(value, expected))
        .unwrap_or(false);

    if authorized {
        next.run(req).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"taskd\"")],
            Json(json!({ "message": "Unauthorized" })),
        )
            .into_response()
    }
}

fn credentials_match(header_value: &str, expected: &BasicAuth) -> bool {
    let Some(encoded) = header_value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        return false;
    };
    let Ok(pair) = String::from_utf8(decoded) else {
        return false;
    };
    match pair.split_once(':') {
        Some((username, password)) => {
            username == expected.username && password == expected.password
        }
        None => false,
    }
}
