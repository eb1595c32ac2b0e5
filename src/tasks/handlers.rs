use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::CurrentUser,
    error::{ApiError, ApiResult},
    state::AppState,
    tasks::dto::{Pagination, TaskOut, TaskPayload},
    tasks::repo,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/task", get(list_tasks))
        .route("/task/:id", get(get_task))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/task", post(create_task))
        .route("/task/:id", put(update_task).delete(delete_task))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser { id: owner_id, .. }: CurrentUser,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TaskOut>> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Task name must not be empty".into()));
    }
    let task = repo::create(
        &state.db,
        owner_id,
        &payload.name,
        payload.comment.as_deref(),
        payload.done,
    )
    .await?;
    info!(task_id = task.id, owner_id, "task created");
    Ok(Json(task.into()))
}

#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser { id: owner_id, .. }: CurrentUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<TaskOut>>> {
    let tasks = repo::list_by_owner(&state.db, owner_id, p.skip, p.limit).await?;
    Ok(Json(tasks.into_iter().map(TaskOut::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser { id: owner_id, .. }: CurrentUser,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<TaskOut>> {
    match repo::get_by_owner(&state.db, owner_id, task_id).await? {
        Some(task) => Ok(Json(task.into())),
        None => Err(ApiError::NotFound("Task not found".into())),
    }
}

#[instrument(skip(state, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser { id: owner_id, .. }: CurrentUser,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<TaskOut>> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Task name must not be empty".into()));
    }
    match repo::update_by_owner(
        &state.db,
        owner_id,
        task_id,
        &payload.name,
        payload.comment.as_deref(),
        payload.done,
    )
    .await?
    {
        Some(task) => {
            info!(task_id, owner_id, "task updated");
            Ok(Json(task.into()))
        }
        None => Err(ApiError::NotFound("Task not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser { id: owner_id, .. }: CurrentUser,
    Path(task_id): Path<i64>,
) -> ApiResult<()> {
    if repo::delete_by_owner(&state.db, owner_id, task_id).await? {
        info!(task_id, owner_id, "task deleted");
        Ok(())
    } else {
        Err(ApiError::NotFound("Task not found".into()))
    }
}
