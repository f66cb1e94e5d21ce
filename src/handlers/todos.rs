//! Todo CRUD handlers: list, get, create, replace, delete.
//!
//! Every handler seeds the store with Item1 when it is empty before doing
//! its own work. Deleting all items is therefore never observable: the next
//! request recreates the default row.

use crate::error::AppError;
use crate::models::TodoItem;
use crate::service::TodoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// GET /api/todo: all items.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    TodoService::seed_if_empty(&state.pool).await?;
    let items = TodoService::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/todo/:id: one item, 404 if absent.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    TodoService::seed_if_empty(&state.pool).await?;
    let item = TodoService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))?;
    Ok(Json(item))
}

/// POST /api/todo: insert, 201 with a Location header naming the new item.
pub async fn create(
    State(state): State<AppState>,
    Json(item): Json<TodoItem>,
) -> Result<impl IntoResponse, AppError> {
    TodoService::seed_if_empty(&state.pool).await?;
    let item = TodoService::create(&state.pool, item).await?;
    tracing::info!(id = item.id, "created todo");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/todo/{}", item.id))],
        Json(item),
    ))
}

/// PUT /api/todo/:id: full replace. 400 when the body id disagrees with the
/// path, 404 when no row has that id, else 204.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(item): Json<TodoItem>,
) -> Result<StatusCode, AppError> {
    TodoService::seed_if_empty(&state.pool).await?;
    if id != item.id {
        return Err(AppError::BadRequest(format!(
            "path id {} does not match body id {}",
            id, item.id
        )));
    }
    if !TodoService::update(&state.pool, &item).await? {
        return Err(AppError::NotFound(format!("todo {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/todo/:id: 404 if absent, else 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    TodoService::seed_if_empty(&state.pool).await?;
    if !TodoService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("todo {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
