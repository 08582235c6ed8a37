//! Folding raw text fragments into a [`Vocabulary`].

use std::sync::OnceLock;

use regex::Regex;

use crate::splitter::split_compound;
use crate::vocabulary::Vocabulary;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Alphabetic tokens extracted from the fragments.
    pub tokens: usize,
    /// Sub-words counted in the frequency table.
    pub words: usize,
    /// Sub-words appended to the pool (not previously drawn).
    pub pooled: usize,
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-zA-Z]{2,}\b").expect("token pattern is valid"))
}

/// Alphabetic runs of two or more letters, case preserved for camelCase
/// detection. Runs glued to digits or underscores are not tokens.
pub fn tokenize(fragment: &str) -> impl Iterator<Item = &str> {
    token_regex().find_iter(fragment).map(|m| m.as_str())
}

impl Vocabulary {
    /// Tokenize, split and pool every fragment, then stamp the run time.
    ///
    /// Not idempotent: ingesting the same text twice doubles both the
    /// frequencies and the pooled duplicates.
    pub fn ingest<I, S>(&mut self, fragments: I) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = IngestReport::default();
        for fragment in fragments {
            for token in tokenize(fragment.as_ref()) {
                report.tokens += 1;
                for word in split_compound(token) {
                    if word.chars().count() < 2 {
                        continue;
                    }
                    report.words += 1;
                    if self.add_word(&word) {
                        report.pooled += 1;
                    }
                }
            }
        }
        self.mark_ingested(crate::now_timestamp());
        tracing::debug!(?report, "ingested fragments");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::COMMON_ERRORS;

    #[test]
    fn test_tokenize() {
        let tokens: Vec<&str> = tokenize("404 Not Found: a XMLHttpRequest failed_badly x2").collect();
        assert_eq!(tokens, vec!["Not", "Found", "XMLHttpRequest"]);
    }

    #[test]
    fn test_ingest_counts_and_pools() {
        let mut v = Vocabulary::new();
        let report = v.ingest(["access denied", "accessDenied"]);
        assert_eq!(report.tokens, 3);
        assert_eq!(report.words, 4);
        assert_eq!(report.pooled, 4);
        assert_eq!(v.frequency("access"), 2);
        assert_eq!(v.frequency("denied"), 2);
        assert_eq!(v.total_words(), 4);
        assert!(v.last_ingested().is_some());
    }

    #[test]
    fn test_used_words_are_counted_but_not_pooled() {
        let mut v = Vocabulary::new();
        v.ingest(["gone"]);
        let mut rng = rand::rng();
        assert_eq!(v.draw(1, &mut rng).as_deref(), Some("gone"));

        let report = v.ingest(["gone gone"]);
        assert_eq!(report.words, 2);
        assert_eq!(report.pooled, 0);
        assert_eq!(v.frequency("gone"), 3);
        assert_eq!(v.bucket_len(1), 0);
    }

    #[test]
    fn test_repeated_ingestion_duplicates() {
        let mut v = Vocabulary::new();
        v.ingest(["server error"]);
        v.ingest(["server error"]);
        assert_eq!(v.frequency("server"), 2);
        assert_eq!(v.bucket_len(2), 4);
    }

    #[test]
    fn test_empty_input_still_stamps() {
        let mut v = Vocabulary::new();
        let report = v.ingest(Vec::<String>::new());
        assert_eq!(report, IngestReport::default());
        assert!(v.is_empty());
        assert!(v.last_ingested().is_some());
    }

    #[test]
    fn test_builtin_phrases_fill_low_buckets() {
        let mut v = Vocabulary::new();
        v.ingest(COMMON_ERRORS);
        for k in 1..=4 {
            assert!(v.bucket_len(k) > 0, "bucket {k} is empty");
        }
    }
}
