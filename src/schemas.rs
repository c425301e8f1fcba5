use common::{Goal, GoalUpdate, MutationResponse, NewGoal, Note, NotePayload, Task, TaskPayload};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::store::{Store, StoreError};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Record storage
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store: Arc::new(store) }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => Self::new("NOT_FOUND", error.to_string()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Storage backend
    pub storage: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::tasks::get_tasks,
        crate::handlers::tasks::create_task,
        crate::handlers::tasks::update_task,
        crate::handlers::tasks::delete_task,
        crate::handlers::tasks::toggle_task,
        crate::handlers::notes::get_notes,
        crate::handlers::notes::create_note,
        crate::handlers::notes::update_note,
        crate::handlers::notes::delete_note,
        crate::handlers::goals::get_goals,
        crate::handlers::goals::create_goal,
        crate::handlers::goals::update_goal,
        crate::handlers::goals::delete_goal,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            MutationResponse,
            Task,
            TaskPayload,
            Note,
            NotePayload,
            Goal,
            NewGoal,
            GoalUpdate,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tasks", description = "Task endpoints"),
        (name = "notes", description = "Note endpoints"),
        (name = "goals", description = "Goal endpoints"),
    ),
    info(
        title = "Youth Balance API",
        description = "Tasks, notes and goals behind the Youth Balance dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
