//! Heuristic English syllable estimation.
//!
//! Vowel-run counting with a silent-e and an "ee"/"oo" correction. Not a
//! dictionary lookup: the exact order of the corrections is part of the
//! contract, since it decides which bucket a word lands in.

/// Short function words that always count as one syllable.
const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Estimate the syllable count of `word`.
///
/// Returns 0 only for blank input. Anything else, including input with no
/// letters at all, estimates to at least 1.
pub fn estimate_syllables(word: &str) -> u32 {
    let lowered = word.to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let letters: String = trimmed.chars().filter(|c| c.is_ascii_lowercase()).collect();
    if letters.len() <= 2 || FUNCTION_WORDS.contains(&letters.as_str()) {
        return 1;
    }

    let mut count: i64 = 0;
    let mut prev_was_vowel = false;
    for (i, c) in letters.chars().enumerate() {
        // A leading 'y' is a consonant ("yellow").
        let is_vowel = is_plain_vowel(c) || (c == 'y' && i > 0);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if letters.ends_with('e') && count > 1 {
        count -= 1;
    }

    let has_vowel_pair = letters
        .as_bytes()
        .windows(2)
        .any(|w| is_plain_vowel(w[0] as char) && is_plain_vowel(w[1] as char));
    if has_vowel_pair {
        let merged = letters.matches("ee").count() + letters.matches("oo").count();
        count = (count - merged as i64).max(1);
    }

    count.max(1) as u32
}
