use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::analysis::AnalysisOutcome;

/// A reconciled analysis ready for persistence. Records are immutable once
/// created: the store only inserts and reads, never updates.
#[derive(Debug, Clone)]
pub struct NewAnalysisRecord {
    pub user_id: Uuid,
    /// Resume text truncated to 500 characters — bounded retention of raw text.
    pub resume_excerpt: String,
    pub ats_score: i64,
    pub suggestions: AnalysisOutcome,
    /// Job description truncated to 300 characters.
    pub job_description_excerpt: String,
}

/// Summary row returned by history queries, newest first.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnalysisRecordSummary {
    pub id: Uuid,
    pub ats_score: i64,
    pub job_description_excerpt: String,
    pub created_at: DateTime<Utc>,
}
