//! Application routes under /api.

use crate::handlers::applications::{approve, create, list, read, reject, statistics};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn application_routes(state: AppState) -> Router {
    Router::new()
        .route("/applications", get(list).post(create))
        .route("/applications/:id", get(read))
        .route("/applications/:id/approve", put(approve))
        .route("/applications/:id/reject", put(reject))
        .route("/statistics", get(statistics))
        .with_state(state)
}
