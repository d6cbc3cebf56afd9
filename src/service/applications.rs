//! Application storage operations against SQLite.

use crate::error::AppError;
use crate::model::{Application, ApplicationStatus, NewApplication, Statistics};
use crate::service::RequestValidator;
use chrono::{Local, SecondsFormat, Utc};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};

/// `submittedAt` layout, day first as in the fr-FR locale.
const SUBMITTED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const SELECT_COLUMNS: &str = "id, name, email, phone, city, motivation, contribution, availability, \
    skills, other_details, membership_type, newsletter_opt_in, status, submitted_at, created_at";

#[derive(FromRow)]
struct ApplicationRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    city: String,
    motivation: String,
    contribution: String,
    availability: String,
    skills: Option<String>,
    other_details: Option<String>,
    membership_type: String,
    newsletter_opt_in: bool,
    status: ApplicationStatus,
    submitted_at: String,
    created_at: String,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = AppError;

    fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
        let skills = match row.skills.as_deref() {
            None | Some("") => Vec::new(),
            Some(text) => serde_json::from_str(text)?,
        };
        Ok(Application {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            city: row.city,
            motivation: row.motivation,
            contribution: row.contribution,
            availability: row.availability,
            skills,
            other_details: row.other_details,
            membership_type: row.membership_type,
            newsletter_opt_in: row.newsletter_opt_in,
            status: row.status,
            submitted_at: row.submitted_at,
            created_at: row.created_at,
        })
    }
}

pub struct ApplicationService;

impl ApplicationService {
    /// Validate presence, then insert with status pending. Returns the new id.
    pub async fn create(pool: &SqlitePool, body: NewApplication) -> Result<i64, AppError> {
        let app = RequestValidator::validate(body)?;
        let skills = serde_json::to_string(&app.skills)?;
        let submitted_at = Local::now().format(SUBMITTED_AT_FORMAT).to_string();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let result = sqlx::query(
            "INSERT INTO applications
             (name, email, phone, city, motivation, contribution, availability,
              skills, other_details, membership_type, newsletter_opt_in, status, submitted_at, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&app.name)
        .bind(&app.email)
        .bind(&app.phone)
        .bind(&app.city)
        .bind(&app.motivation)
        .bind(&app.contribution)
        .bind(&app.availability)
        .bind(&skills)
        .bind(&app.other_details)
        .bind(&app.membership_type)
        .bind(app.newsletter_opt_in)
        .bind(ApplicationStatus::Pending)
        .bind(&submitted_at)
        .bind(&created_at)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(id, "application created");
        Ok(id)
    }

    /// All applications, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Application>, AppError> {
        let sql = format!(
            "SELECT {} FROM applications ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<ApplicationRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        rows.into_iter().map(Application::try_from).collect()
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Application, AppError> {
        let sql = format!("SELECT {} FROM applications WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<ApplicationRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        row.ok_or_else(not_found)?.try_into()
    }

    /// Overwrite the status. Setting the current status again is a successful no-op.
    pub async fn set_status(
        pool: &SqlitePool,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        tracing::info!(id, status = %status, "application status updated");
        Ok(())
    }

    /// Counts per status read in one transaction. A failed sub-count leaves its key
    /// unset instead of failing the whole result.
    pub async fn statistics(pool: &SqlitePool) -> Statistics {
        let mut tx = match pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::warn!(error = %e, "statistics: could not open transaction");
                return Statistics::default();
            }
        };
        let stats = Statistics {
            total: count(&mut tx, "total", None).await,
            pending: count(&mut tx, "pending", Some(ApplicationStatus::Pending)).await,
            approved: count(&mut tx, "approved", Some(ApplicationStatus::Approved)).await,
            rejected: count(&mut tx, "rejected", Some(ApplicationStatus::Rejected)).await,
        };
        if let Err(e) = tx.commit().await {
            tracing::warn!(error = %e, "statistics: commit failed");
        }
        stats
    }
}

async fn count(
    tx: &mut Transaction<'_, Sqlite>,
    key: &'static str,
    status: Option<ApplicationStatus>,
) -> Option<i64> {
    let result = match status {
        Some(status) => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE status = ?")
                .bind(status)
                .fetch_one(&mut **tx)
                .await
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
                .fetch_one(&mut **tx)
                .await
        }
    };
    match result {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(key, error = %e, "statistics: count failed");
            None
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Application not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillsInput;
    use crate::store::{connect_in_memory, ensure_tables};

    async fn pool() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        pool
    }

    fn submission(name: &str) -> NewApplication {
        NewApplication {
            name: Some(name.into()),
            email: Some("a@x.com".into()),
            phone: Some("1".into()),
            city: Some("C".into()),
            motivation: Some("M".into()),
            contribution: Some("Co".into()),
            availability: Some("Av".into()),
            membership_type: Some("T".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_read_is_pending() {
        let pool = pool().await;
        let id = ApplicationService::create(&pool, submission("A")).await.unwrap();
        assert_eq!(id, 1);
        let app = ApplicationService::read(&pool, id).await.unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.name, "A");
        assert!(app.skills.is_empty());
        assert!(!app.newsletter_opt_in);
        assert_eq!(app.submitted_at.len(), "19/10/2026 10:00:00".len());
    }

    #[tokio::test]
    async fn skills_and_newsletter_round_trip_through_storage() {
        let pool = pool().await;
        let mut body = submission("A");
        body.skills = Some(SkillsInput::List(vec!["design".into(), "events".into()]));
        body.newsletter_opt_in = Some(true);
        body.other_details = Some("weekends".into());
        let id = ApplicationService::create(&pool, body).await.unwrap();
        let app = ApplicationService::read(&pool, id).await.unwrap();
        assert_eq!(app.skills, vec!["design".to_string(), "events".to_string()]);
        assert!(app.newsletter_opt_in);
        assert_eq!(app.other_details.as_deref(), Some("weekends"));
    }

    #[tokio::test]
    async fn invalid_submission_writes_nothing() {
        let pool = pool().await;
        let mut body = submission("A");
        body.email = None;
        let err = ApplicationService::create(&pool, body).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(ApplicationService::list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let pool = pool().await;
        for name in ["first", "second", "third"] {
            ApplicationService::create(&pool, submission(name)).await.unwrap();
        }
        let names: Vec<String> = ApplicationService::list(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn read_missing_is_not_found() {
        let pool = pool().await;
        let err = ApplicationService::read(&pool, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_status_last_write_wins_and_is_idempotent() {
        let pool = pool().await;
        let id = ApplicationService::create(&pool, submission("A")).await.unwrap();
        ApplicationService::set_status(&pool, id, ApplicationStatus::Approved).await.unwrap();
        ApplicationService::set_status(&pool, id, ApplicationStatus::Approved).await.unwrap();
        assert_eq!(ApplicationService::read(&pool, id).await.unwrap().status, ApplicationStatus::Approved);
        ApplicationService::set_status(&pool, id, ApplicationStatus::Rejected).await.unwrap();
        let app = ApplicationService::read(&pool, id).await.unwrap();
        assert_eq!(app.status, ApplicationStatus::Rejected);
        assert_eq!(app.name, "A");
    }

    #[tokio::test]
    async fn set_status_missing_is_not_found() {
        let pool = pool().await;
        let err = ApplicationService::set_status(&pool, 9, ApplicationStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn statistics_total_matches_status_counts() {
        let pool = pool().await;
        assert_eq!(
            ApplicationService::statistics(&pool).await,
            Statistics { total: Some(0), pending: Some(0), approved: Some(0), rejected: Some(0) }
        );
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(ApplicationService::create(&pool, submission(name)).await.unwrap());
        }
        ApplicationService::set_status(&pool, ids[0], ApplicationStatus::Approved).await.unwrap();
        ApplicationService::set_status(&pool, ids[1], ApplicationStatus::Rejected).await.unwrap();
        ApplicationService::set_status(&pool, ids[2], ApplicationStatus::Rejected).await.unwrap();

        let stats = ApplicationService::statistics(&pool).await;
        assert_eq!(stats.total, Some(4));
        assert_eq!(stats.pending, Some(1));
        assert_eq!(stats.approved, Some(1));
        assert_eq!(stats.rejected, Some(2));
    }

    #[tokio::test]
    async fn statistics_degrade_when_storage_is_gone() {
        let pool = pool().await;
        sqlx::query("DROP TABLE applications").execute(&pool).await.unwrap();
        let stats = ApplicationService::statistics(&pool).await;
        assert_eq!(stats, Statistics::default());
        assert_eq!(serde_json::to_value(&stats).unwrap(), serde_json::json!({}));
    }
}
