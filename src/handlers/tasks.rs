use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{MutationResponse, RecordId, Task, TaskPayload};
use tracing::{debug, info, instrument, trace};

use super::{HandlerError, store_error};
use crate::schemas::{AppState, ErrorResponse};

/// Get all tasks, newest first
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "Tasks retrieved successfully", body = [Task])
    )
)]
#[instrument(skip(state))]
pub async fn get_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    trace!("Entering get_tasks function");
    let tasks = state.store.tasks.list().await;
    debug!("Returning {} tasks", tasks.len());
    Json(tasks)
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = MutationResponse),
        (status = 400, description = "Invalid request")
    )
)]
#[instrument(skip(state))]
pub async fn create_task(
    State(state): State<AppState>,
    Valid(Json(payload)): Valid<Json<TaskPayload>>,
) -> (StatusCode, Json<MutationResponse>) {
    trace!("Entering create_task function");
    let id = state
        .store
        .tasks
        .insert(|id, created_at| Task {
            id,
            title: payload.title.clone(),
            description: Some(payload.description.clone()),
            priority: payload.priority.clone(),
            category: payload.category.clone(),
            completed: false,
            created_at,
        })
        .await;

    info!("Task created successfully with ID: {}, title: {}", id, payload.title);
    (StatusCode::CREATED, Json(MutationResponse::created(id)))
}

/// Replace title, description, priority and category of a task
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = "tasks",
    params(
        ("task_id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = MutationResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<RecordId>,
    Valid(Json(payload)): Valid<Json<TaskPayload>>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering update_task function for ID: {}", task_id);
    state
        .store
        .tasks
        .update(task_id, |task| {
            task.title = payload.title.clone();
            task.description = Some(payload.description.clone());
            task.priority = payload.priority.clone();
            task.category = payload.category.clone();
        })
        .await
        .map_err(store_error)?;

    info!("Task updated successfully with ID: {}", task_id);
    Ok(Json(MutationResponse::ok()))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = "tasks",
    params(
        ("task_id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully", body = MutationResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<RecordId>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering delete_task function for ID: {}", task_id);
    state.store.tasks.remove(task_id).await.map_err(store_error)?;

    info!("Task deleted successfully with ID: {}", task_id);
    Ok(Json(MutationResponse::ok()))
}

/// Flip the completion flag of a task
#[utoipa::path(
    post,
    path = "/api/tasks/{task_id}/toggle",
    tag = "tasks",
    params(
        ("task_id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task toggled successfully", body = MutationResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(task_id): Path<RecordId>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering toggle_task function for ID: {}", task_id);
    let task = state
        .store
        .tasks
        .update(task_id, |task| task.completed = !task.completed)
        .await
        .map_err(store_error)?;

    info!("Task {} is now {}", task_id, if task.completed { "completed" } else { "pending" });
    Ok(Json(MutationResponse::ok()))
}
