//! Deterministic Scorer — keyword-overlap score computable without any
//! external service. Used as the guaranteed-available fallback when the
//! structured analyzer cannot produce a usable score.

use crate::analysis::keywords::KeywordSet;

/// Computes the fraction of job-description keywords present in the resume
/// keyword set, scaled to 0–100 and rounded to the nearest integer.
///
/// Pure function of its inputs: equal keyword-set pairs always yield the
/// same score. An empty job set scores 0 — documented edge case, not an
/// error.
pub fn overlap_score(job_keywords: &KeywordSet, resume_keywords: &KeywordSet) -> u32 {
    if job_keywords.is_empty() {
        return 0;
    }

    let matched = job_keywords
        .iter()
        .filter(|k| resume_keywords.contains(k))
        .count();

    ((matched as f64 / job_keywords.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> KeywordSet {
        terms.iter().collect()
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let job = set(&["python", "sql", "aws"]);
        let resume = set(&["python", "sql"]);
        assert_eq!(overlap_score(&job, &resume), 67);
    }

    #[test]
    fn test_empty_job_set_scores_zero() {
        let job = KeywordSet::new();
        let resume = set(&["python"]);
        assert_eq!(overlap_score(&job, &resume), 0);
    }

    #[test]
    fn test_full_overlap_scores_100() {
        let job = set(&["rust", "tokio"]);
        let resume = set(&["tokio", "rust", "axum"]);
        assert_eq!(overlap_score(&job, &resume), 100);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let job = set(&["java"]);
        let resume = set(&["rust"]);
        assert_eq!(overlap_score(&job, &resume), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let job = set(&["Python"]);
        let resume = set(&["PYTHON"]);
        assert_eq!(overlap_score(&job, &resume), 100);
    }

    #[test]
    fn test_score_is_always_in_range() {
        let cases = [
            (vec!["a1", "b2", "c3", "d4", "e5", "f6", "g7"], vec!["a1"]),
            (vec!["x9"], vec![]),
            (vec![], vec![]),
        ];
        for (job, resume) in cases {
            let score = overlap_score(&set(&job), &set(&resume));
            assert!(score <= 100, "score {score} out of range");
        }
    }

    #[test]
    fn test_score_is_reproducible() {
        let job = set(&["python", "sql", "aws", "docker"]);
        let resume = set(&["python", "docker"]);
        let first = overlap_score(&job, &resume);
        for _ in 0..10 {
            assert_eq!(overlap_score(&job, &resume), first);
        }
    }
}
