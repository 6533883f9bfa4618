//! Keyword Extractor — derives an ordered, de-duplicated keyword set from raw
//! text, collapsing adjacent tokens into known multi-word phrases.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::normalizer::normalize;

/// Multi-word phrases recognized by the default dictionary. Single tokens
/// never need an entry — only sequences the tokenizer would otherwise split.
const DEFAULT_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "natural language processing",
    "computer vision",
    "data science",
    "data analysis",
    "data engineering",
    "software engineering",
    "web development",
    "project management",
    "product management",
    "version control",
    "unit testing",
    "continuous integration",
    "continuous delivery",
    "rest api",
    "distributed systems",
    "cloud computing",
];

/// An ordered set of normalized keywords. Order follows first occurrence in
/// the source text; membership is case-insensitive; duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a term, lowercasing for membership. Returns false if the term
    /// was already present (case-insensitively).
    pub fn insert(&mut self, term: &str) -> bool {
        let key = term.to_lowercase();
        if key.is_empty() || !self.seen.insert(key.clone()) {
            return false;
        }
        self.terms.push(key);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for term in iter {
            set.insert(term.as_ref());
        }
        set
    }
}

/// Known-phrase dictionary injected into the extractor.
///
/// Versionable configuration: loaded from a file when
/// `PHRASE_DICTIONARY_PATH` is set, otherwise built from [`DEFAULT_PHRASES`].
/// Tests construct controlled vocabularies via [`PhraseDictionary::from_entries`].
#[derive(Debug, Clone)]
pub struct PhraseDictionary {
    phrases: HashSet<String>,
    max_tokens: usize,
}

impl PhraseDictionary {
    /// Builds a dictionary from raw phrase entries. Each entry is normalized
    /// with the same tokenizer as the extractor; entries that normalize to
    /// fewer than two tokens are ignored.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut phrases = HashSet::new();
        let mut max_tokens = 0;
        for entry in entries {
            let tokens = normalize(entry.as_ref());
            if tokens.len() < 2 {
                continue;
            }
            max_tokens = max_tokens.max(tokens.len());
            phrases.insert(tokens.join(" "));
        }
        Self { phrases, max_tokens }
    }

    /// Loads a dictionary from a plain-text file, one phrase per line.
    /// Blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read phrase dictionary at {}", path.display()))?;
        let entries: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        Ok(Self::from_entries(&entries))
    }

    fn contains_tokens(&self, tokens: &[String]) -> bool {
        self.phrases.contains(&tokens.join(" "))
    }
}

impl Default for PhraseDictionary {
    fn default() -> Self {
        Self::from_entries(DEFAULT_PHRASES)
    }
}

/// Extracts an ordered keyword set from raw text.
///
/// Normalizes first, then greedily collapses the longest dictionary phrase
/// starting at each position; unmatched tokens are kept as-is. Fails closed:
/// empty input returns an empty set, never an error.
pub fn extract(text: &str, dictionary: &PhraseDictionary) -> KeywordSet {
    let tokens = normalize(text);
    let mut keywords = KeywordSet::new();

    let mut i = 0;
    while i < tokens.len() {
        let longest = dictionary.max_tokens.min(tokens.len() - i);
        let matched = (2..=longest)
            .rev()
            .find(|&len| dictionary.contains_tokens(&tokens[i..i + len]));

        match matched {
            Some(len) => {
                keywords.insert(&tokens[i..i + len].join(" "));
                i += len;
            }
            None => {
                keywords.insert(&tokens[i]);
                i += 1;
            }
        }
    }

    keywords
}
