//! Structured Analyzer — invokes the generation service under a strict
//! JSON output contract and turns whatever comes back into an
//! [`AnalysisOutcome`].
//!
//! This component never errors: a malformed reply, an empty reply, or a
//! failed call all degrade to [`AnalysisFailure`] values that the
//! reconciler handles downstream.

use async_trait::async_trait;
use tracing::warn;

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::analysis::{AnalysisFailure, AnalysisOutcome, StructuredAnalysis};

/// The analyzer seam. Carried in `AppState` as `Arc<dyn StructuredAnalyzer>`
/// so pipeline tests can substitute a stub without a live service.
#[async_trait]
pub trait StructuredAnalyzer: Send + Sync {
    /// Exactly one outbound call per invocation. No caching: the service is
    /// non-deterministic generation, so identical inputs may legitimately
    /// receive different outputs across calls.
    async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisOutcome;
}

/// Production analyzer backed by the LLM client.
pub struct LlmAnalyzer {
    llm: LlmClient,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl StructuredAnalyzer for LlmAnalyzer {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisOutcome {
        let prompt = ANALYSIS_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{job_description}", job_description);

        let response = match self.llm.call(&prompt, ANALYSIS_SYSTEM).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Generation service call failed: {e}");
                return AnalysisOutcome::Failed(AnalysisFailure::from_error(e.to_string()));
            }
        };

        let raw = match response.text() {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("Generation service returned empty content");
                return AnalysisOutcome::Failed(AnalysisFailure::from_error(
                    LlmError::EmptyContent.to_string(),
                ));
            }
        };

        parse_model_output(raw)
    }
}

/// Envelope shape the prompt asks for: `{"success": true, "analysis": {…}}`.
#[derive(serde::Deserialize)]
struct ModelEnvelope {
    analysis: StructuredAnalysis,
}

/// Parses raw service output into an outcome.
///
/// Strips stray code fences, then accepts either the requested envelope or
/// a bare analysis object — the service alternates between the two. Numeric
/// ranges are NOT re-validated here; out-of-contract values pass through
/// and consumers tolerate them. Anything else becomes a failure carrying
/// the unstripped raw text.
pub fn parse_model_output(raw: &str) -> AnalysisOutcome {
    let cleaned = strip_json_fences(raw);

    if let Ok(envelope) = serde_json::from_str::<ModelEnvelope>(cleaned) {
        return AnalysisOutcome::Completed(envelope.analysis);
    }
    if let Ok(analysis) = serde_json::from_str::<StructuredAnalysis>(cleaned) {
        return AnalysisOutcome::Completed(analysis);
    }

    warn!("Generation service output did not match the analysis schema");
    AnalysisOutcome::Failed(AnalysisFailure::unparsable(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ANALYSIS: &str = r#"{
        "resume_skills": ["python", "sql"],
        "job_description_skills": ["python", "aws"],
        "missing_skills": {
            "from_resume_for_job_description": ["aws"],
            "from_job_description_for_resume": []
        },
        "ats_optimized_bullet_point_improvements": [],
        "ats_optimization_tips": ["Quantify achievements"],
        "compatibility_score": 74,
        "content_analysis": {
            "ats_parse_rate": 88,
            "keyword_match": 60,
            "impact_score": 50,
            "readability_score": 85
        },
        "overall_assessment": "Good fit overall"
    }"#;

    #[test]
    fn test_parses_bare_analysis_object() {
        match parse_model_output(VALID_ANALYSIS) {
            AnalysisOutcome::Completed(a) => {
                assert_eq!(a.compatibility_score, Some(74));
                assert_eq!(a.resume_skills, vec!["python", "sql"]);
            }
            AnalysisOutcome::Failed(f) => panic!("expected completed, got {f:?}"),
        }
    }

    #[test]
    fn test_parses_success_envelope() {
        let enveloped = format!(r#"{{"success": true, "analysis": {VALID_ANALYSIS}}}"#);
        match parse_model_output(&enveloped) {
            AnalysisOutcome::Completed(a) => assert_eq!(a.compatibility_score, Some(74)),
            AnalysisOutcome::Failed(f) => panic!("expected completed, got {f:?}"),
        }
    }

    #[test]
    fn test_strips_code_fences_before_parsing() {
        let fenced = format!("```json\n{VALID_ANALYSIS}\n```");
        match parse_model_output(&fenced) {
            AnalysisOutcome::Completed(a) => assert_eq!(a.compatibility_score, Some(74)),
            AnalysisOutcome::Failed(f) => panic!("expected completed, got {f:?}"),
        }
    }

    #[test]
    fn test_prose_becomes_failure_with_raw_output() {
        let prose = "I'm sorry, I cannot produce JSON for this resume.";
        match parse_model_output(prose) {
            AnalysisOutcome::Failed(f) => {
                assert!(!f.success);
                assert_eq!(f.raw_model_output.as_deref(), Some(prose));
                assert_eq!(f.error, None);
            }
            AnalysisOutcome::Completed(_) => panic!("prose must not parse"),
        }
    }

    #[test]
    fn test_partial_json_becomes_failure() {
        let partial = r#"{"resume_skills": ["python"], "job_descr"#;
        assert!(matches!(
            parse_model_output(partial),
            AnalysisOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_wrong_shape_object_becomes_failure() {
        // Valid JSON, but not the analysis schema
        let other = r#"{"hello": "world"}"#;
        assert!(matches!(
            parse_model_output(other),
            AnalysisOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_failure_keeps_unstripped_raw_text() {
        let fenced_garbage = "```json\nnot actually json\n```";
        match parse_model_output(fenced_garbage) {
            AnalysisOutcome::Failed(f) => {
                assert_eq!(f.raw_model_output.as_deref(), Some(fenced_garbage));
            }
            AnalysisOutcome::Completed(_) => panic!("garbage must not parse"),
        }
    }

    #[test]
    fn test_out_of_range_score_passes_through() {
        let inflated = VALID_ANALYSIS.replace("\"compatibility_score\": 74", "\"compatibility_score\": 250");
        match parse_model_output(&inflated) {
            AnalysisOutcome::Completed(a) => assert_eq!(a.compatibility_score, Some(250)),
            AnalysisOutcome::Failed(f) => panic!("expected completed, got {f:?}"),
        }
    }
}
