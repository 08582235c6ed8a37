//! Greedy 5-7-5 line construction over a [`Vocabulary`].
//!
//! Each line repeatedly draws the largest word that still fits (capped at
//! [`MAX_WORD_SYLLABLES`]). When nothing fits, it takes any short word even
//! if that overshoots; when the pool is empty, the line stops short. Lines
//! are never retried or rolled back.

#[cfg(test)]
mod tests;

use rand::Rng;
use time::OffsetDateTime;

use crate::syllables::estimate_syllables;
use crate::vocabulary::Vocabulary;

/// Syllable budget of each line, in order.
pub const LINE_TARGETS: [u32; 3] = [5, 7, 5];

/// Largest bucket a single draw will ask for.
pub const MAX_WORD_SYLLABLES: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haiku {
    pub lines: [String; 3],
    pub generated_at: OffsetDateTime,
}

/// Generate a haiku, consuming words from `vocab`.
///
/// An exhausted pool yields empty lines rather than an error.
pub fn generate<R: Rng + ?Sized>(vocab: &mut Vocabulary, rng: &mut R) -> Haiku {
    let lines = LINE_TARGETS.map(|target| render_line(&build_line(vocab, target, rng)));
    if lines.iter().all(String::is_empty) {
        tracing::warn!("word pool exhausted, returning an empty haiku");
    }
    Haiku {
        lines,
        generated_at: crate::now_timestamp(),
    }
}

/// Syllables of `words`, re-estimated from the words themselves.
pub fn line_syllables(words: &[String]) -> u32 {
    words.iter().map(|w| estimate_syllables(w)).sum()
}

/// Draw words until the line reaches `target` syllables or the pool runs dry.
pub fn build_line<R: Rng + ?Sized>(
    vocab: &mut Vocabulary,
    target: u32,
    rng: &mut R,
) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    loop {
        let accumulated = line_syllables(&words);
        if accumulated >= target {
            break;
        }
        let remaining = target - accumulated;

        let fitting = (1..=remaining.min(MAX_WORD_SYLLABLES))
            .rev()
            .find_map(|k| vocab.draw(k, rng));
        let word = match fitting {
            Some(word) => word,
            None => match draw_any(vocab, rng) {
                Some(word) => {
                    tracing::debug!(
                        line_target = target,
                        remaining,
                        word = %word,
                        "no fitting word, overshooting"
                    );
                    word
                }
                None => {
                    tracing::debug!(line_target = target, accumulated, "pool exhausted mid-line");
                    break;
                }
            },
        };
        words.push(word);
    }
    words
}

/// First word available from the small buckets, smallest first.
fn draw_any<R: Rng + ?Sized>(vocab: &mut Vocabulary, rng: &mut R) -> Option<String> {
    (1..=MAX_WORD_SYLLABLES).find_map(|k| vocab.draw(k, rng))
}

/// Join with spaces and uppercase the first character only.
pub fn render_line(words: &[String]) -> String {
    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
