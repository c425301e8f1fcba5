use crate::handlers::{
    goals::{create_goal, delete_goal, get_goals, update_goal},
    health::health_check,
    notes::{create_note, delete_note, get_notes, update_note},
    tasks::{create_task, delete_task, get_tasks, toggle_task, update_task},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    response::Json,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Task routes
        .route("/api/tasks", get(get_tasks))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/:task_id", put(update_task))
        .route("/api/tasks/:task_id", delete(delete_task))
        .route("/api/tasks/:task_id/toggle", post(toggle_task))
        // Note routes
        .route("/api/notes", get(get_notes))
        .route("/api/notes", post(create_note))
        .route("/api/notes/:note_id", put(update_note))
        .route("/api/notes/:note_id", delete(delete_note))
        // Goal routes
        .route("/api/goals", get(get_goals))
        .route("/api/goals", post(create_goal))
        .route("/api/goals/:goal_id", put(update_goal))
        .route("/api/goals/:goal_id", delete(delete_goal))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
