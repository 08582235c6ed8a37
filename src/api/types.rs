use std::collections::BTreeMap;

use ku_core::{Haiku, PoolEntry, VocabularyStats};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

// ---------------------------------------------------------------------------
// Records (JSON bodies returned by the HTTP API)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub syllables: u32,
    pub frequency: u32,
    pub used: bool,
}

impl From<PoolEntry> for WordRecord {
    fn from(e: PoolEntry) -> Self {
        Self {
            word: e.word,
            syllables: e.syllables,
            frequency: e.frequency,
            used: e.used,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<WordRecord>,
    pub total: usize,
    pub used: usize,
}

#[derive(Debug, Serialize)]
pub struct HaikuResponse {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub timestamp: String,
}

impl From<Haiku> for HaikuResponse {
    fn from(h: Haiku) -> Self {
        let [line1, line2, line3] = h.lines;
        Self {
            line1,
            line2,
            line3,
            timestamp: format_timestamp(h.generated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub status: &'static str,
}

impl ScrapeResponse {
    pub fn started() -> Self {
        Self {
            status: "scraping started",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_words: usize,
    pub used_words: usize,
    pub available_words: usize,
    /// `null` until the first harvest completes.
    pub last_scrape: Option<String>,
    /// Bucket sizes keyed by syllable count; JSON object keys are strings.
    pub word_distribution: BTreeMap<String, usize>,
}

impl From<VocabularyStats> for StatsResponse {
    fn from(s: VocabularyStats) -> Self {
        Self {
            total_words: s.total_words,
            used_words: s.used_words,
            available_words: s.available_words,
            last_scrape: s.last_ingested.map(format_timestamp),
            word_distribution: s
                .distribution
                .into_iter()
                .map(|(k, n)| (k.to_string(), n))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// RFC 3339, or the `Display` form if the offset cannot be rendered.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
}
