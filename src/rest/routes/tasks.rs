// rest/routes/tasks.rs — Task REST routes (the controller layer).
//
// HTTP status and body-shape policy lives here; the service and store
// below know nothing about HTTP.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::store::StoreOutcome;
use crate::AppContext;

type RestResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

/// Anything that escapes the service is logged and flattened to a generic
/// 500 — no internal detail reaches the client.
fn internal_error(op: &str, err: anyhow::Error) -> (StatusCode, Json<Value>) {
    error!("{op} failed: {err:#}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> RestResult {
    let tasks = ctx
        .tasks
        .list_all()
        .await
        .map_err(|e| internal_error("list", e))?;

    if tasks.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "Todo list is empty" })),
        ));
    }
    Ok((StatusCode::OK, Json(json!({ "data": tasks }))))
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub title: Option<String>,
}

pub async fn add_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<AddTaskRequest>,
) -> RestResult {
    let title = body.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Input task title" })),
        ));
    }

    let task = ctx
        .tasks
        .create(title)
        .await
        .map_err(|e| internal_error("create", e))?;
    Ok((StatusCode::CREATED, Json(json!({ "data": task }))))
}

pub async fn change_task_state(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> RestResult {
    let id = parse_task_id(&id)?;

    match ctx
        .tasks
        .toggle(&id)
        .await
        .map_err(|e| internal_error("toggle", e))?
    {
        StoreOutcome::Found(task) => Ok((StatusCode::OK, Json(json!({ "data": task })))),
        StoreOutcome::NotFound => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Task not found" })),
        )),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> RestResult {
    let id = parse_task_id(&id)?;

    match ctx
        .tasks
        .delete(&id)
        .await
        .map_err(|e| internal_error("delete", e))?
    {
        StoreOutcome::Found(()) => Ok((
            StatusCode::ACCEPTED,
            Json(json!({ "message": "Task successfully deleted" })),
        )),
        StoreOutcome::NotFound => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Task not found" })),
        )),
    }
}

/// Task ids are UUIDs; anything that does not parse is a 400.
fn parse_task_id(raw: &str) -> Result<String, (StatusCode, Json<Value>)> {
    match Uuid::parse_str(raw) {
        Ok(id) => Ok(id.to_string()),
        Err(_) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid task ID format" })),
        )),
    }
}
