// rest/mod.rs — REST API server.
//
// Axum HTTP server on the configured port (`PORT`, default 3002).
//
// Endpoints:
//   GET    /tasks
//   POST   /tasks
//   PATCH  /tasks/{id}
//   DELETE /tasks/{id}

pub mod auth;
pub mod routes;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, patch};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.port));
    let router = build_router(ctx);

    info!("taskd listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Routes plus the cross-cutting layers. Layer order, outermost first:
/// no-cache header (stamped on every response, preflights and 401s
/// included), CORS (short-circuits OPTIONS preflight), basic auth (no-op
/// unless credentials are configured).
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::add_task),
        )
        .route(
            "/tasks/{id}",
            patch(routes::tasks::change_task_state).delete(routes::tasks::delete_task),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            auth::require_basic_auth,
        ))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .with_state(ctx)
}
