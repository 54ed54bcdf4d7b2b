//! Task CRUD and listing handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use spindle_core::domain::{CreateTaskInput, Cursor, Status, Task, TaskId, UpdateTaskInput};
use spindle_core::observability::StatusCounts;

use crate::error::ApiError;
use crate::state::AppContext;

/// Upper bound on page_size/limit, applied at the transport boundary.
const MAX_PAGE_SIZE: u64 = 100;
const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Deserialize)]
pub struct CursorListParams {
    status: Option<String>,
    cursor: Option<String>,
    limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct OffsetListParams {
    status: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
}

fn parse_status(raw: Option<String>) -> Result<Option<Status>, ApiError> {
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Status::from_str(s)
            .map(Some)
            .map_err(|e| ApiError::bad_request(e.to_string())),
    }
}

fn parse_id(raw: i64) -> Result<TaskId, ApiError> {
    if raw <= 0 {
        return Err(ApiError::bad_request("invalid id"));
    }
    Ok(TaskId::new(raw))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let input: CreateTaskInput =
        serde_json::from_value(body).map_err(|_| ApiError::bad_request("invalid JSON"))?;
    if input.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }
    let task = ctx.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(id)?;
    let task = ctx.service.get(id).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(id)?;
    let input: UpdateTaskInput =
        serde_json::from_value(body).map_err(|_| ApiError::bad_request("invalid JSON"))?;
    let task = ctx.service.update(id, input).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(id)?;
    ctx.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_tasks_cursor(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<CursorListParams>,
) -> Result<Json<Value>, ApiError> {
    let status = parse_status(params.status)?;
    let after = match params.cursor.as_deref() {
        None | Some("") => None,
        Some(token) => Some(Cursor::decode(token)?),
    };
    let limit = params
        .limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let page = ctx.service.list_cursor(after.as_ref(), limit, status).await?;
    let next_cursor = page.next_cursor.as_ref().map(Cursor::encode);

    Ok(Json(json!({
        "data": page.items,
        "next_cursor": next_cursor,
        "limit": limit,
    })))
}

pub async fn list_tasks_paged(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<OffsetListParams>,
) -> Result<Json<Value>, ApiError> {
    let status = parse_status(params.status)?;
    let page_num = params.page.filter(|p| *p > 0).unwrap_or(1);
    let page_size = params
        .page_size
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let page = ctx.service.list_offset(status, page_num, page_size).await?;

    Ok(Json(json!({
        "data": page.items,
        "total_count": page.total_count,
        "page": page.page,
        "page_size": page.page_size,
        "total_pages": page.total_pages(),
    })))
}

pub async fn stats(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<StatusCounts>, ApiError> {
    let counts = ctx.service.counts().await?;
    Ok(Json(counts))
}
