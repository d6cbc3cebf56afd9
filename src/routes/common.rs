//! Common routes: health, readiness, version.

use crate::response::{HealthBody, ReadyBody, VersionBody};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".into(),
        message: "Server is running".into(),
    })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded".into(),
                database: Some("unavailable".into()),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok".into(),
        database: Some("ok".into()),
    }))
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME").into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /health, /ready and /version. Readiness pings the database.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
