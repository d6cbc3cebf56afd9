//! SQLite pool setup and `applications` table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const APPLICATIONS_TABLE: &str = "applications";

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("connected to {}", database_url);
    Ok(pool)
}

/// Single-connection in-memory pool. The connection is never recycled, so the
/// database lives as long as the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Create the applications table if it does not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            city TEXT NOT NULL,
            motivation TEXT NOT NULL,
            contribution TEXT NOT NULL,
            availability TEXT NOT NULL,
            skills TEXT NOT NULL DEFAULT '[]',
            other_details TEXT,
            membership_type TEXT NOT NULL,
            newsletter_opt_in INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'pending',
            submitted_at TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
        APPLICATIONS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!("table {} ready", APPLICATIONS_TABLE);
    Ok(())
}
