use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{Goal, GoalStatus, GoalUpdate, MutationResponse, NewGoal, RecordId};
use tracing::{debug, info, instrument, trace};

use super::{HandlerError, store_error};
use crate::schemas::{AppState, ErrorResponse};

/// Get all goals, newest first
#[utoipa::path(
    get,
    path = "/api/goals",
    tag = "goals",
    responses(
        (status = 200, description = "Goals retrieved successfully", body = [Goal])
    )
)]
#[instrument(skip(state))]
pub async fn get_goals(State(state): State<AppState>) -> Json<Vec<Goal>> {
    trace!("Entering get_goals function");
    let goals = state.store.goals.list().await;
    debug!("Returning {} goals", goals.len());
    Json(goals)
}

/// Create a new goal with no progress
#[utoipa::path(
    post,
    path = "/api/goals",
    tag = "goals",
    request_body = NewGoal,
    responses(
        (status = 201, description = "Goal created successfully", body = MutationResponse),
        (status = 400, description = "Invalid request")
    )
)]
#[instrument(skip(state))]
pub async fn create_goal(
    State(state): State<AppState>,
    Valid(Json(payload)): Valid<Json<NewGoal>>,
) -> (StatusCode, Json<MutationResponse>) {
    trace!("Entering create_goal function");
    let id = state
        .store
        .goals
        .insert(|id, created_at| Goal {
            id,
            title: payload.title.clone(),
            description: Some(payload.description.clone()),
            target_date: payload.target_date,
            progress: 0,
            status: GoalStatus::Active,
            created_at,
        })
        .await;

    info!("Goal created successfully with ID: {}, title: {}", id, payload.title);
    (StatusCode::CREATED, Json(MutationResponse::created(id)))
}

/// Replace title, description, target date and progress of a goal. The
/// status is left as it is.
#[utoipa::path(
    put,
    path = "/api/goals/{goal_id}",
    tag = "goals",
    params(
        ("goal_id" = i64, Path, description = "Goal ID")
    ),
    request_body = GoalUpdate,
    responses(
        (status = 200, description = "Goal updated successfully", body = MutationResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<RecordId>,
    Valid(Json(payload)): Valid<Json<GoalUpdate>>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering update_goal function for ID: {}", goal_id);
    state
        .store
        .goals
        .update(goal_id, |goal| {
            goal.title = payload.title.clone();
            goal.description = Some(payload.description.clone());
            goal.target_date = payload.target_date;
            goal.progress = payload.progress;
        })
        .await
        .map_err(store_error)?;

    info!("Goal updated successfully with ID: {} (progress {})", goal_id, payload.progress);
    Ok(Json(MutationResponse::ok()))
}

/// Delete a goal
#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}",
    tag = "goals",
    params(
        ("goal_id" = i64, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal deleted successfully", body = MutationResponse),
        (status = 404, description = "Goal not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<RecordId>,
) -> Result<Json<MutationResponse>, HandlerError> {
    trace!("Entering delete_goal function for ID: {}", goal_id);
    state.store.goals.remove(goal_id).await.map_err(store_error)?;

    info!("Goal deleted successfully with ID: {}", goal_id);
    Ok(Json(MutationResponse::ok()))
}
