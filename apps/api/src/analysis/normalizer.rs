//! Text Normalizer — turns raw extracted text into comparable lowercase tokens.

/// Stop words removed during normalization. Kept deliberately small and
/// resume-oriented; the extractor depends on this list being stable.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "has", "have",
    "in", "is", "it", "its", "of", "on", "or", "our", "that", "the", "their", "this", "to", "was",
    "we", "were", "will", "with", "you", "your",
];

/// Minimum token length after normalization.
const MIN_TOKEN_LEN: usize = 2;

/// Single-character tokens that survive the minimum-length filter because
/// they are real technical terms.
const SHORT_TOKEN_ALLOWLIST: &[&str] = &["c", "r"];

/// Normalizes free-form text into a sequence of comparable tokens.
///
/// Lowercases, maps punctuation and whitespace runs to token boundaries
/// (keeping `+` and `#` so "c++" and "c#" survive), drops stop words, and
/// drops tokens shorter than [`MIN_TOKEN_LEN`] unless allowlisted.
///
/// Pure and deterministic. Empty input yields an empty sequence.
/// Re-normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .filter(|t| !STOP_WORDS.contains(t))
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN || SHORT_TOKEN_ALLOWLIST.contains(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            normalize("Python, SQL; AWS!"),
            vec!["python", "sql", "aws"]
        );
    }

    #[test]
    fn test_removes_stop_words() {
        assert_eq!(
            normalize("experience with the Python language"),
            vec!["experience", "python", "language"]
        );
    }

    #[test]
    fn test_drops_short_tokens_unless_allowlisted() {
        // "x" is dropped, "c" and "r" survive via the allowlist
        assert_eq!(normalize("x C R go"), vec!["c", "r", "go"]);
    }

    #[test]
    fn test_keeps_plus_and_hash() {
        assert_eq!(normalize("C++ and C# devs"), vec!["c++", "c#", "devs"]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            normalize("rust   \n\n  tokio\t\taxum"),
            vec!["rust", "tokio", "axum"]
        );
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "Senior Backend Engineer — Python, SQL & AWS (5+ years)",
            "Machine Learning; C++ / C#  ",
            "the quick brown fox",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.join(" "));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
