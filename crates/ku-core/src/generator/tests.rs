use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::phrases::COMMON_ERRORS;

fn builtin_vocab() -> Vocabulary {
    let mut v = Vocabulary::new();
    v.ingest(COMMON_ERRORS);
    v
}

fn words_of(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

#[test]
fn test_render_line() {
    let words: Vec<String> = vec!["page".into(), "not".into(), "found".into()];
    assert_eq!(render_line(&words), "Page not found");
    let empty: Vec<String> = Vec::new();
    assert_eq!(render_line(&empty), "");
    assert_eq!(render_line(&["dns".to_string()]), "Dns");
}

#[test]
fn test_lines_hit_targets_with_full_pool() {
    let mut v = builtin_vocab();
    let mut rng = StdRng::seed_from_u64(5);
    for target in LINE_TARGETS {
        let line = build_line(&mut v, target, &mut rng);
        assert_eq!(line_syllables(&line), target, "{line:?}");
    }
}

#[test]
fn test_largest_fitting_word_first() {
    let mut v = Vocabulary::new();
    v.add_word("gone");
    v.add_word("unavailable");
    let line = build_line(&mut v, 5, &mut StdRng::seed_from_u64(0));
    assert_eq!(line, vec!["unavailable", "gone"]);
}

#[test]
fn test_generate_has_three_lines_within_budget() {
    let mut v = builtin_vocab();
    let mut rng = StdRng::seed_from_u64(11);
    let haiku = generate(&mut v, &mut rng);
    assert_eq!(haiku.lines.len(), 3);
    for (line, target) in haiku.lines.iter().zip(LINE_TARGETS) {
        assert!(!line.is_empty());
        assert!(line_syllables(&words_of(line)) <= target, "{line}");
        assert!(line.chars().next().unwrap().is_uppercase());
    }
}

#[test]
fn test_generated_words_are_consumed() {
    let mut v = builtin_vocab();
    let before = v.total_words();
    let haiku = generate(&mut v, &mut StdRng::seed_from_u64(3));
    let drawn: Vec<String> = haiku.lines.iter().flat_map(|l| words_of(l)).collect();
    assert_eq!(v.total_words(), before - drawn.len());
    assert!(drawn.iter().all(|w| v.is_used(w)));
}

#[test]
fn test_overshoot_when_nothing_fits() {
    let mut v = Vocabulary::new();
    v.add_word("unavailable");
    v.add_word("authorized");
    let line = build_line(&mut v, 5, &mut StdRng::seed_from_u64(0));
    // 4 + 4: the second word only fits through the fallback.
    assert_eq!(line.len(), 2);
    assert_eq!(line_syllables(&line), 8);
}

#[test]
fn test_fallback_ignores_large_buckets() {
    let mut v = Vocabulary::new();
    v.add_word("authentication");
    let line = build_line(&mut v, 5, &mut StdRng::seed_from_u64(0));
    assert!(line.is_empty());
    assert_eq!(v.bucket_len(5), 1);
}

#[test]
fn test_short_line_when_pool_runs_dry() {
    let mut v = Vocabulary::new();
    v.add_word("gone");
    let line = build_line(&mut v, 5, &mut StdRng::seed_from_u64(0));
    assert_eq!(line, vec!["gone"]);
}

#[test]
fn test_empty_pool_gives_empty_haiku() {
    let mut v = Vocabulary::new();
    let haiku = generate(&mut v, &mut StdRng::seed_from_u64(0));
    assert!(haiku.lines.iter().all(String::is_empty));
}

#[test]
fn test_same_seed_same_haiku() {
    let a = generate(&mut builtin_vocab(), &mut StdRng::seed_from_u64(99));
    let b = generate(&mut builtin_vocab(), &mut StdRng::seed_from_u64(99));
    assert_eq!(a.lines, b.lines);
}

#[test]
fn test_pool_drains_completely() {
    let mut v = builtin_vocab();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        generate(&mut v, &mut rng);
    }
    for k in 1..=MAX_WORD_SYLLABLES {
        assert_eq!(v.bucket_len(k), 0, "bucket {k}");
    }
    let haiku = generate(&mut v, &mut rng);
    assert!(haiku.lines.iter().all(String::is_empty));
}
