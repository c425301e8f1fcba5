pub mod goals;
pub mod health;
pub mod notes;
pub mod tasks;

use axum::{http::StatusCode, response::Json};

use crate::schemas::ErrorResponse;
use crate::store::StoreError;

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn store_error(error: StoreError) -> HandlerError {
    tracing::warn!("{}", error);
    let status = match error {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse::from(error)))
}
