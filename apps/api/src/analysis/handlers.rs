//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::pipeline::{run_analysis, PipelineSettings};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::analysis::AnalysisOutcome;
use crate::models::record::AnalysisRecordSummary;
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 10;
const MAX_HISTORY_LIMIT: i64 = 50;
const UPLOAD_PREVIEW_CHARS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub score: i64,
    pub suggestions: AnalysisOutcome,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub preview: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Uuid,
    pub limit: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Accepts a PDF in the multipart field `resume`, extracts its text, and
/// returns it with a short preview. Extraction failures reject the request
/// — they are an input problem, not a pipeline defect.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut document: Option<bytes::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            document = Some(data);
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let text = extract_text(document).await?;
    let preview = text.chars().take(UPLOAD_PREVIEW_CHARS).collect();

    Ok(Json(UploadResponse {
        success: true,
        preview,
        text,
    }))
}

/// POST /api/v1/resumes/analyze
///
/// Runs the full pipeline: keyword extraction → baseline score → structured
/// analysis → reconciliation → persistence. The response always carries a
/// score; `suggestions` is either the structured analysis or the failure
/// record when the generation service misbehaved.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let settings = PipelineSettings::from_config(&state.config);

    let run = run_analysis(
        state.analyzer.as_ref(),
        state.store.as_ref(),
        &state.phrases,
        &settings,
        request.user_id,
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    tracing::debug!("Analysis persisted as record {}", run.record_id);

    Ok(Json(AnalyzeResponse {
        success: true,
        score: run.score,
        suggestions: run.suggestions,
    }))
}

/// GET /api/v1/resumes/history?user_id=…&limit=…
///
/// Returns reverse-chronological analysis summaries for a user.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<AnalysisRecordSummary>>, AppError> {
    let limit = effective_history_limit(params.limit);

    let history = state.store.list_recent(params.user_id, limit).await?;
    Ok(Json(history))
}

/// Applies the history limit policy: default 10, clamped to 1..=50.
fn effective_history_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}
