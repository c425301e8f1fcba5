use common::{RecordId, Task, TaskPayload};

use super::{ApiResult, HttpApiClient};

/// Get all tasks
pub async fn get_tasks(client: &HttpApiClient) -> ApiResult<Vec<Task>> {
    tracing::trace!("Fetching all tasks");
    let result = client.get::<Vec<Task>>("/api/tasks").await;
    match &result {
        Ok(tasks) => tracing::info!("Fetched {} tasks", tasks.len()),
        Err(e) => tracing::error!("Failed to fetch tasks: {}", e),
    }
    result
}

/// Create a new task
pub async fn create_task(client: &HttpApiClient, payload: &TaskPayload) -> ApiResult<Option<RecordId>> {
    tracing::debug!("Creating new task: {}", payload.title);
    let result = client.post("/api/tasks", Some(payload)).await.map(|ack| ack.id);
    match &result {
        Ok(id) => tracing::info!("Successfully created task '{}' (ID: {:?})", payload.title, id),
        Err(e) => tracing::error!("Failed to create task '{}': {}", payload.title, e),
    }
    result
}

/// Update an existing task
pub async fn update_task(client: &HttpApiClient, task_id: RecordId, payload: &TaskPayload) -> ApiResult<()> {
    tracing::debug!("Updating task ID {}: {}", task_id, payload.title);
    let result = client.put(&format!("/api/tasks/{}", task_id), payload).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully updated task ID {}", task_id),
        Err(e) => tracing::error!("Failed to update task {}: {}", task_id, e),
    }
    result
}

/// Delete a task
pub async fn delete_task(client: &HttpApiClient, task_id: RecordId) -> ApiResult<()> {
    tracing::debug!("Deleting task ID: {}", task_id);
    let result = client.delete(&format!("/api/tasks/{}", task_id)).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully deleted task ID: {}", task_id),
        Err(e) => tracing::error!("Failed to delete task {}: {}", task_id, e),
    }
    result
}

/// Flip the completion flag of a task
pub async fn toggle_task(client: &HttpApiClient, task_id: RecordId) -> ApiResult<()> {
    tracing::debug!("Toggling task ID: {}", task_id);
    let result = client
        .post::<()>(&format!("/api/tasks/{}/toggle", task_id), None)
        .await
        .map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Toggled task ID: {}", task_id),
        Err(e) => tracing::error!("Failed to toggle task {}: {}", task_id, e),
    }
    result
}
