//! Word-pool management and syllable-constrained haiku generation.
//!
//! Words harvested from error pages are split, counted and bucketed by
//! estimated syllable count; the generator then drains those buckets into
//! 5-7-5 lines, preferring words it has never used before.

pub mod generator;
pub mod ingest;
pub mod phrases;
pub mod splitter;
pub mod syllables;
pub mod vocabulary;

pub use generator::{generate, Haiku, LINE_TARGETS};
pub use ingest::IngestReport;
pub use splitter::split_compound;
pub use syllables::estimate_syllables;
pub use vocabulary::{PoolEntry, Vocabulary, VocabularyStats};

/// Current wall-clock time, local offset when the platform can report it.
pub fn now_timestamp() -> time::OffsetDateTime {
    time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc())
}
