//! Word pool with frequency tracking and a used-words set.
//!
//! Words are bucketed by estimated syllable count. Duplicates stay in their
//! bucket so frequent words are more likely to be drawn; drawing removes one
//! physical instance and remembers the word as used. Frequencies accumulate
//! across every ingestion run and are never reset.


use std::collections::{BTreeMap, HashMap, HashSet};

use rand::seq::IndexedRandom;
use rand::Rng;
use time::OffsetDateTime;

use crate::syllables::estimate_syllables;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// syllable count → pooled words, insertion order, duplicates kept
    buckets: BTreeMap<u32, Vec<String>>,
    /// word → times seen during ingestion
    frequency: HashMap<String, u32>,
    used: HashSet<String>,
    last_ingested: Option<OffsetDateTime>,
}

/// One physical pool instance, as listed by [`Vocabulary::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub word: String,
    pub syllables: u32,
    pub frequency: u32,
    pub used: bool,
}

/// Point-in-time summary of the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStats {
    pub total_words: usize,
    pub used_words: usize,
    /// `total_words - used_words`, floored at zero.
    pub available_words: usize,
    pub last_ingested: Option<OffsetDateTime>,
    pub distribution: BTreeMap<u32, usize>,
}

/// Which candidate set a draw was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawTier {
    /// Unused and seen exactly once.
    Pristine,
    Unused,
    Reuse,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sighting of `word` and pool it under its estimated bucket,
    /// unless it has already been drawn. Returns whether it was pooled.
    pub fn add_word(&mut self, word: &str) -> bool {
        let syllables = estimate_syllables(word);
        if syllables == 0 {
            return false;
        }
        *self.frequency.entry(word.to_string()).or_insert(0) += 1;
        if self.used.contains(word) {
            return false;
        }
        self.buckets
            .entry(syllables)
            .or_default()
            .push(word.to_string());
        true
    }

    /// Draw one word from the `syllables` bucket.
    ///
    /// Candidates are taken from the first non-empty tier: unused words seen
    /// once, then any unused word, then anything left in the bucket. The pick
    /// is uniform over physical instances within the tier.
    pub fn draw<R: Rng + ?Sized>(&mut self, syllables: u32, rng: &mut R) -> Option<String> {
        let bucket = self.buckets.get(&syllables)?;
        if bucket.is_empty() {
            return None;
        }

        let (tier, candidates) = self.draw_candidates(bucket);
        let &index = candidates.choose(rng)?;
        let word = bucket[index].clone();

        let bucket = self.buckets.get_mut(&syllables)?;
        let first = bucket.iter().position(|w| *w == word)?;
        bucket.remove(first);
        self.used.insert(word.clone());

        tracing::debug!(word = %word, syllables, ?tier, "drew word");
        Some(word)
    }

    fn draw_candidates(&self, bucket: &[String]) -> (DrawTier, Vec<usize>) {
        let unused: Vec<usize> = (0..bucket.len())
            .filter(|&i| !self.used.contains(&bucket[i]))
            .collect();
        let pristine: Vec<usize> = unused
            .iter()
            .copied()
            .filter(|&i| self.frequency(&bucket[i]) == 1)
            .collect();

        if !pristine.is_empty() {
            (DrawTier::Pristine, pristine)
        } else if !unused.is_empty() {
            (DrawTier::Unused, unused)
        } else {
            (DrawTier::Reuse, (0..bucket.len()).collect())
        }
    }

    pub(crate) fn mark_ingested(&mut self, at: OffsetDateTime) {
        self.last_ingested = Some(at);
    }

    pub fn frequency(&self, word: &str) -> u32 {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    pub fn is_used(&self, word: &str) -> bool {
        self.used.contains(word)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Physical instances currently pooled under `syllables`.
    pub fn bucket_len(&self, syllables: u32) -> usize {
        self.buckets.get(&syllables).map_or(0, Vec::len)
    }

    /// Size of every bucket ever created, including drained ones.
    pub fn bucket_sizes(&self) -> BTreeMap<u32, usize> {
        self.buckets.iter().map(|(&k, v)| (k, v.len())).collect()
    }

    pub fn total_words(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_words() == 0
    }

    pub fn last_ingested(&self) -> Option<OffsetDateTime> {
        self.last_ingested
    }

    /// Every pooled instance, ordered by bucket then insertion.
    pub fn entries(&self) -> Vec<PoolEntry> {
        self.buckets
            .iter()
            .flat_map(|(&syllables, words)| {
                words.iter().map(move |word| PoolEntry {
                    word: word.clone(),
                    syllables,
                    frequency: self.frequency(word),
                    used: self.is_used(word),
                })
            })
            .collect()
    }

    pub fn stats(&self) -> VocabularyStats {
        let total_words = self.total_words();
        let used_words = self.used_count();
        VocabularyStats {
            total_words,
            used_words,
            available_words: total_words.saturating_sub(used_words),
            last_ingested: self.last_ingested,
            distribution: self.bucket_sizes(),
        }
    }
}
