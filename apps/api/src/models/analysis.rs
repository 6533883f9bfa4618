use serde::{Deserialize, Serialize};

/// Schema-conforming analysis expected from the generation service.
///
/// All fields are required for a successful parse except
/// `compatibility_score` — the service occasionally omits it, and the
/// reconciler falls back to the deterministic score in that case. Numeric
/// fields are requested as integers 0–100 but NOT re-validated after
/// parsing: the service is not guaranteed to respect the range, so
/// consumers must tolerate out-of-contract values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnalysis {
    pub resume_skills: Vec<String>,
    pub job_description_skills: Vec<String>,
    pub missing_skills: MissingSkills,
    pub ats_optimized_bullet_point_improvements: Vec<BulletImprovement>,
    pub ats_optimization_tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_score: Option<i64>,
    pub content_analysis: ContentAnalysis,
    pub overall_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkills {
    pub from_resume_for_job_description: Vec<String>,
    pub from_job_description_for_resume: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletImprovement {
    pub original_summary: String,
    pub suggested_bullets: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub ats_parse_rate: i64,
    pub keyword_match: i64,
    pub impact_score: i64,
    pub readability_score: i64,
}

/// Record produced when the generation service cannot satisfy the output
/// contract. Carries the raw output (when the service replied but the reply
/// was unparsable) and/or an error description (when the call itself
/// failed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_model_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisFailure {
    /// Failure for output that arrived but could not be parsed as the
    /// schema. Keeps the raw text for the audit trail.
    pub fn unparsable(raw_model_output: impl Into<String>) -> Self {
        Self {
            success: false,
            raw_model_output: Some(raw_model_output.into()),
            error: None,
        }
    }

    /// Failure for a service call that produced no usable output.
    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            raw_model_output: None,
            error: Some(error.into()),
        }
    }
}

/// Outcome of the structured analyzer — the sum type every consumer must
/// handle explicitly. A failure is a normal, representable value, never an
/// exception path.
///
/// Serializes untagged: a completed outcome is the bare analysis object, a
/// failed one is the `{"success": false, …}` record. Deserialization is
/// unambiguous because the analysis schema requires fields a failure record
/// never carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Completed(StructuredAnalysis),
    Failed(AnalysisFailure),
}
