//! Analysis Record Store — append-only persistence for reconciled analyses.
//!
//! The pipeline treats durable storage as an external dependency behind the
//! [`RecordStore`] trait; `AppState` carries it as `Arc<dyn RecordStore>` so
//! tests can substitute in-memory doubles.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::{AnalysisRecordSummary, NewAnalysisRecord};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists a record and returns its id. Append-only: records are never
    /// updated or deleted by this service.
    async fn create(&self, record: NewAnalysisRecord) -> Result<Uuid, AppError>;

    /// Returns up to `limit` summaries for a user, ordered by `created_at`
    /// descending.
    async fn list_recent(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<AnalysisRecordSummary>, AppError>;
}

/// PostgreSQL-backed record store.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create(&self, record: NewAnalysisRecord) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let suggestions = serde_json::to_value(&record.suggestions)
            .map_err(|e| AppError::Internal(e.into()))?;

        sqlx::query(
            r#"
            INSERT INTO analysis_records
                (id, user_id, resume_excerpt, ats_score, suggestions,
                 job_description_excerpt, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(record.user_id)
        .bind(&record.resume_excerpt)
        .bind(record.ats_score)
        .bind(&suggestions)
        .bind(&record.job_description_excerpt)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        info!(
            "Persisted analysis record {id} for user {} (score {})",
            record.user_id, record.ats_score
        );

        Ok(id)
    }

    async fn list_recent(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<AnalysisRecordSummary>, AppError> {
        Ok(sqlx::query_as::<_, AnalysisRecordSummary>(
            r#"
            SELECT id, ats_score, job_description_excerpt, created_at
            FROM analysis_records
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
