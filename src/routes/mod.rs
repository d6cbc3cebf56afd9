//! Route tables and the assembled application router.

mod applications;
mod common;

pub use applications::application_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::handlers::api_not_found;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Page served at `/` when a static directory is configured.
pub const INDEX_PAGE: &str = "inscription.html";

/// All API routes under `/api`, plus optional static files, with tracing, CORS,
/// request timeout and body limit applied.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(application_routes(state))
        .fallback(api_not_found);

    let mut app = Router::new().nest("/api", api);

    if let Some(dir) = &config.static_dir {
        app = app
            .route_service("/", ServeFile::new(dir.join(INDEX_PAGE)))
            .fallback_service(ServeDir::new(dir));
    }

    app.layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
