//! Score Reconciler — decides which of the two candidate scores is
//! authoritative. The service-reported score wins whenever it exists; the
//! deterministic keyword-overlap score is the guaranteed-available
//! fallback, so reconciliation can never fail to produce a score.

use crate::models::analysis::AnalysisOutcome;

/// Picks the authoritative score.
///
/// Precedence: the analysis `compatibility_score` when the outcome
/// completed and the field is present; otherwise the deterministic score.
/// The service value is passed through without range checks unless
/// `divergence_limit` is set, in which case a service score differing from
/// the deterministic one by more than the limit is discarded in favor of
/// the deterministic score.
pub fn reconcile(
    deterministic: u32,
    outcome: &AnalysisOutcome,
    divergence_limit: Option<u32>,
) -> i64 {
    let service_score = match outcome {
        AnalysisOutcome::Completed(analysis) => analysis.compatibility_score,
        AnalysisOutcome::Failed(_) => None,
    };

    match service_score {
        Some(score) => {
            if let Some(limit) = divergence_limit {
                if score.abs_diff(i64::from(deterministic)) > u64::from(limit) {
                    return i64::from(deterministic);
                }
            }
            score
        }
        None => i64::from(deterministic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::parse_model_output;
    use crate::models::analysis::AnalysisFailure;

    fn completed(score: Option<i64>) -> AnalysisOutcome {
        let mut json = serde_json::json!({
            "resume_skills": [],
            "job_description_skills": [],
            "missing_skills": {
                "from_resume_for_job_description": [],
                "from_job_description_for_resume": []
            },
            "ats_optimized_bullet_point_improvements": [],
            "ats_optimization_tips": [],
            "content_analysis": {
                "ats_parse_rate": 0,
                "keyword_match": 0,
                "impact_score": 0,
                "readability_score": 0
            },
            "overall_assessment": ""
        });
        if let Some(s) = score {
            json["compatibility_score"] = s.into();
        }
        parse_model_output(&json.to_string())
    }

    #[test]
    fn test_service_score_is_authoritative() {
        assert_eq!(reconcile(40, &completed(Some(85)), None), 85);
    }

    #[test]
    fn test_failure_falls_back_to_deterministic() {
        let failed = AnalysisOutcome::Failed(AnalysisFailure::from_error("unreachable"));
        assert_eq!(reconcile(40, &failed, None), 40);
    }

    #[test]
    fn test_missing_score_falls_back_to_deterministic() {
        assert_eq!(reconcile(40, &completed(None), None), 40);
    }

    #[test]
    fn test_out_of_range_service_score_passes_through_unchecked() {
        assert_eq!(reconcile(40, &completed(Some(250)), None), 250);
    }

    #[test]
    fn test_divergence_limit_rejects_outliers() {
        assert_eq!(reconcile(40, &completed(Some(95)), Some(30)), 40);
    }

    #[test]
    fn test_divergence_limit_accepts_nearby_scores() {
        assert_eq!(reconcile(40, &completed(Some(60)), Some(30)), 60);
    }

    #[test]
    fn test_divergence_limit_boundary_is_inclusive() {
        // Exactly at the limit is still accepted
        assert_eq!(reconcile(40, &completed(Some(70)), Some(30)), 70);
    }

    #[test]
    fn test_divergence_limit_handles_negative_service_score() {
        // |-5 - 10| = 15: inside a limit of 20, outside a limit of 10
        assert_eq!(reconcile(10, &completed(Some(-5)), Some(20)), -5);
        assert_eq!(reconcile(10, &completed(Some(-5)), Some(10)), 10);
    }
}
