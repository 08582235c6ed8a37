//! Dictionary-free compound word splitting.
//!
//! Precedence: camelCase / PascalCase segmentation, then greedy matching
//! against [`fragments`] for long all-lowercase tokens, then the identity.

pub mod fragments;
#[cfg(test)]
mod tests;

use std::sync::OnceLock;

/// Tokens shorter than this are never fragment-split.
const MIN_FRAGMENT_SPLIT_LEN: usize = 8;
/// Fragments shorter than this are never matched by the greedy scan.
const MIN_FRAGMENT_LEN: usize = 3;
/// Share of the token the greedy scan must have walked over.
const MIN_COVERAGE: f64 = 0.8;

/// Split a raw token into lowercase sub-words.
///
/// Usually returns at least one word. The camelCase path can return an empty
/// list when every segment is a single letter (e.g. `"aB"`).
pub fn split_compound(token: &str) -> Vec<String> {
    if token.chars().any(|c| c.is_ascii_uppercase()) {
        let parts = camel_segments(token);
        if parts.len() > 1 {
            return parts
                .into_iter()
                .filter(|p| p.chars().count() >= 2)
                .map(|p| p.to_lowercase())
                .collect();
        }
    }

    let lower = token.to_lowercase();
    if let Some(words) = split_by_fragments(&lower) {
        return words;
    }
    vec![lower]
}

/// camelCase segmentation: `[A-Z]?[a-z]+` or an uppercase run that is not
/// immediately followed by a lowercase letter. Other characters are skipped.
fn camel_segments(token: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    let n = chars.len();
    let byte_at = |i: usize| chars.get(i).map_or(token.len(), |&(b, _)| b);
    let is_upper = |i: usize| i < n && chars[i].1.is_ascii_uppercase();
    let is_lower = |i: usize| i < n && chars[i].1.is_ascii_lowercase();

    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < n {
        // Optional capital followed by lowercase letters.
        let start_lower = if is_upper(pos) { pos + 1 } else { pos };
        let mut end = start_lower;
        while is_lower(end) {
            end += 1;
        }
        if end > start_lower {
            segments.push(&token[byte_at(pos)..byte_at(end)]);
            pos = end;
            continue;
        }

        // Uppercase run; its last capital belongs to the next word unless the
        // run reaches the end of the token.
        if is_upper(pos) {
            let mut run_end = pos;
            while is_upper(run_end) {
                run_end += 1;
            }
            let end = if run_end == n { run_end } else { run_end - 1 };
            if end > pos {
                segments.push(&token[byte_at(pos)..byte_at(end)]);
                pos = end;
                continue;
            }
        }

        pos += 1;
    }
    segments
}

/// Deduplicated fragment table, longest first, short fragments removed.
fn known_fragments() -> &'static [&'static str] {
    static TABLE: OnceLock<Vec<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut all: Vec<&'static str> = fragments::PREFIXES
            .iter()
            .chain(fragments::COMMON_WORDS)
            .copied()
            .filter(|f| f.len() >= MIN_FRAGMENT_LEN)
            .collect();
        all.sort_unstable();
        all.dedup();
        all.sort_by(|a, b| b.len().cmp(&a.len()));
        all
    })
}

/// Greedy left-to-right fragment scan over an all-lowercase token.
fn split_by_fragments(lower: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = lower.chars().collect();
    let n = chars.len();
    if n < MIN_FRAGMENT_SPLIT_LEN || !chars.iter().all(|c| c.is_alphabetic()) {
        return None;
    }

    let mut found: Vec<&'static str> = Vec::new();
    let mut i = 0;
    while i < n {
        let matched = known_fragments().iter().copied().find(|frag| {
            let len = frag.len();
            i + len <= n && frag.chars().zip(&chars[i..i + len]).all(|(a, &b)| a == b)
        });
        match matched {
            Some(frag) => {
                found.push(frag);
                i += frag.len();
            }
            // Unmatched filler; the scan gives up on the final character.
            None if i + 1 < n => i += 1,
            None => break,
        }
    }

    if found.len() > 1 && (i as f64) >= (n as f64) * MIN_COVERAGE {
        let words: Vec<String> = found
            .into_iter()
            .filter(|w| w.len() >= 2)
            .map(str::to_string)
            .collect();
        if words.len() > 1 {
            tracing::trace!(token = lower, ?words, "fragment split");
            return Some(words);
        }
    }
    None
}
