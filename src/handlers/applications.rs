//! Application handlers: submit, list, read, approve, reject, statistics.

use crate::error::AppError;
use crate::extractors::{ApplicationId, Submission};
use crate::model::{Application, ApplicationStatus, Statistics};
use crate::response::{created, message_ok};
use crate::service::ApplicationService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /api/applications, JSON or urlencoded form.
pub async fn create(
    State(state): State<AppState>,
    Submission(body): Submission,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = ApplicationService::create(&state.pool, body).await?;
    Ok(created("Application created successfully", id))
}

/// GET /api/applications
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Application>>, AppError> {
    let rows = ApplicationService::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/applications/:id
pub async fn read(
    State(state): State<AppState>,
    ApplicationId(id): ApplicationId,
) -> Result<Json<Application>, AppError> {
    let app = ApplicationService::read(&state.pool, id).await?;
    Ok(Json(app))
}

/// PUT /api/applications/:id/approve
pub async fn approve(
    State(state): State<AppState>,
    ApplicationId(id): ApplicationId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    ApplicationService::set_status(&state.pool, id, ApplicationStatus::Approved).await?;
    Ok(message_ok("Application approved successfully"))
}

/// PUT /api/applications/:id/reject
pub async fn reject(
    State(state): State<AppState>,
    ApplicationId(id): ApplicationId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    ApplicationService::set_status(&state.pool, id, ApplicationStatus::Rejected).await?;
    Ok(message_ok("Application rejected successfully"))
}

/// GET /api/statistics. Best effort; missing counts are omitted.
pub async fn statistics(State(state): State<AppState>) -> Json<Statistics> {
    Json(ApplicationService::statistics(&state.pool).await)
}

/// Unmatched paths under /api.
pub async fn api_not_found() -> AppError {
    AppError::NotFound("Not found".into())
}
