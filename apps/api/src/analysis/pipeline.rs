//! Pipeline Orchestrator — composes normalization, scoring, structured
//! analysis, reconciliation, and persistence into the end-to-end request
//! flow.
//!
//! Per request: reject empty inputs up front, extract keywords, compute the
//! deterministic baseline, run the analyzer under a deadline (a timeout or
//! service failure degrades the outcome, it never aborts the request),
//! reconcile, persist. Persistence is the only fatal stage — an unpersisted
//! analysis cannot later be retrieved via history.

use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::StructuredAnalyzer;
use crate::analysis::keywords::{extract, PhraseDictionary};
use crate::analysis::reconcile::reconcile;
use crate::analysis::scorer::overlap_score;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisFailure, AnalysisOutcome};
use crate::models::record::NewAnalysisRecord;
use crate::store::RecordStore;

const RESUME_EXCERPT_CHARS: usize = 500;
const JOB_DESCRIPTION_EXCERPT_CHARS: usize = 300;

/// Knobs the orchestrator needs from application config.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Deadline for the generation call. The service has no internal bound,
    /// so the deadline is enforced here; hitting it degrades to an
    /// `AnalysisFailure`, same as any other service error.
    pub analysis_timeout: Duration,
    /// Optional bounded-divergence guard for reconciliation. `None`
    /// preserves the always-prefer-service behavior.
    pub score_divergence_limit: Option<u32>,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            analysis_timeout: Duration::from_secs(config.analysis_timeout_secs),
            score_divergence_limit: config.score_divergence_limit,
        }
    }
}

/// Result of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub record_id: Uuid,
    pub score: i64,
    pub suggestions: AnalysisOutcome,
}

/// Runs the full matching-and-scoring pipeline for one request.
pub async fn run_analysis(
    analyzer: &dyn StructuredAnalyzer,
    store: &dyn RecordStore,
    phrases: &PhraseDictionary,
    settings: &PipelineSettings,
    user_id: Uuid,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisRun, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let job_keywords = extract(job_description, phrases);
    let resume_keywords = extract(resume_text, phrases);
    let baseline = overlap_score(&job_keywords, &resume_keywords);
    info!(
        "Baseline keyword score: {baseline} ({} JD keywords, {} resume keywords)",
        job_keywords.len(),
        resume_keywords.len()
    );

    let suggestions = match tokio::time::timeout(
        settings.analysis_timeout,
        analyzer.analyze(resume_text, job_description),
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(_) => AnalysisOutcome::Failed(AnalysisFailure::from_error(format!(
            "generation service timed out after {}s",
            settings.analysis_timeout.as_secs()
        ))),
    };

    let score = reconcile(baseline, &suggestions, settings.score_divergence_limit);
    info!("Reconciled score: {score}");

    let record_id = store
        .create(NewAnalysisRecord {
            user_id,
            resume_excerpt: truncate_chars(resume_text, RESUME_EXCERPT_CHARS),
            ats_score: score,
            suggestions: suggestions.clone(),
            job_description_excerpt: truncate_chars(
                job_description,
                JOB_DESCRIPTION_EXCERPT_CHARS,
            ),
        })
        .await?;

    Ok(AnalysisRun {
        record_id,
        score,
        suggestions,
    })
}

/// Truncates to at most `max_chars` characters, respecting char boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
