//! Membership intake: application submissions, review and statistics over SQLite.

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use client::{ClientError, IntakeClient};
pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Application, ApplicationStatus, NewApplication, SkillsInput, Statistics};
pub use routes::{application_routes, build_app, common_routes};
pub use service::ApplicationService;
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
