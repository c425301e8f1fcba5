use common::{Goal, GoalUpdate, NewGoal, RecordId};

use super::{ApiResult, HttpApiClient};

/// Get all goals
pub async fn get_goals(client: &HttpApiClient) -> ApiResult<Vec<Goal>> {
    tracing::trace!("Fetching all goals");
    let result = client.get::<Vec<Goal>>("/api/goals").await;
    match &result {
        Ok(goals) => tracing::info!("Fetched {} goals", goals.len()),
        Err(e) => tracing::error!("Failed to fetch goals: {}", e),
    }
    result
}

/// Create a new goal; progress and status are left to the server
pub async fn create_goal(client: &HttpApiClient, payload: &NewGoal) -> ApiResult<Option<RecordId>> {
    tracing::debug!("Creating new goal: {}", payload.title);
    let result = client.post("/api/goals", Some(payload)).await.map(|ack| ack.id);
    match &result {
        Ok(id) => tracing::info!("Successfully created goal '{}' (ID: {:?})", payload.title, id),
        Err(e) => tracing::error!("Failed to create goal '{}': {}", payload.title, e),
    }
    result
}

/// Update an existing goal, including its progress
pub async fn update_goal(client: &HttpApiClient, goal_id: RecordId, payload: &GoalUpdate) -> ApiResult<()> {
    tracing::debug!(
        "Updating goal ID {}: {} (progress {})",
        goal_id,
        payload.title,
        payload.progress
    );
    let result = client.put(&format!("/api/goals/{}", goal_id), payload).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully updated goal ID {}", goal_id),
        Err(e) => tracing::error!("Failed to update goal {}: {}", goal_id, e),
    }
    result
}

/// Delete a goal
pub async fn delete_goal(client: &HttpApiClient, goal_id: RecordId) -> ApiResult<()> {
    tracing::debug!("Deleting goal ID: {}", goal_id);
    let result = client.delete(&format!("/api/goals/{}", goal_id)).await.map(|_| ());
    match &result {
        Ok(()) => tracing::info!("Successfully deleted goal ID: {}", goal_id),
        Err(e) => tracing::error!("Failed to delete goal {}: {}", goal_id, e),
    }
    result
}
