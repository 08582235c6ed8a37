use super::*;

fn split(token: &str) -> Vec<String> {
    split_compound(token)
}

#[test]
fn test_camel_case() {
    assert_eq!(split("fooBarBaz"), vec!["foo", "bar", "baz"]);
    assert_eq!(split("PermissionDenied"), vec!["permission", "denied"]);
}

#[test]
fn test_acronym_runs() {
    assert_eq!(split("HTTPServer"), vec!["http", "server"]);
    assert_eq!(split("XMLHttpRequest"), vec!["xml", "http", "request"]);
    assert_eq!(split("getURL"), vec!["get", "url"]);
}

#[test]
fn test_single_letter_segments_dropped() {
    assert_eq!(split("isAValue"), vec!["is", "value"]);
    // Every segment too short: nothing survives.
    assert!(split("aB").is_empty());
}

#[test]
fn test_single_camel_segment_falls_through() {
    assert_eq!(split("Error"), vec!["error"]);
    // One uppercase run, then fragment matching on the lowercase form.
    assert_eq!(split("ACCESSDENIED"), vec!["access", "denied"]);
    assert_eq!(split("Connectiontimeout"), vec!["connection", "timeout"]);
}

#[test]
fn test_short_token_identity() {
    assert_eq!(split("ab"), vec!["ab"]);
    // Below the fragment-split length even though it is "web" + "box".
    assert_eq!(split("webbox"), vec!["webbox"]);
}

#[test]
fn test_fragment_split() {
    assert_eq!(split("permissiondenied"), vec!["permission", "denied"]);
    assert_eq!(split("connectiontimeout"), vec!["connection", "timeout"]);
    assert_eq!(split("accessdenied"), vec!["access", "denied"]);
}

#[test]
fn test_longest_fragment_wins() {
    // "sandbox" beats "sand" + "box".
    assert_eq!(split("sandboxerror"), vec!["sandbox", "error"]);
}

#[test]
fn test_skipped_characters_count_toward_coverage() {
    // "xx" is unmatched filler between fragments.
    assert_eq!(split("webxxnetwork"), vec!["web", "network"]);
}

#[test]
fn test_single_fragment_is_not_a_split() {
    assert_eq!(split("nonexistentword"), vec!["nonexistentword"]);
    assert_eq!(split("timeouts"), vec!["timeouts"]);
}

#[test]
fn test_non_alphabetic_long_token_identity() {
    assert_eq!(split("error404error"), vec!["error404error"]);
}

#[test]
fn test_known_fragments_sorted_and_deduplicated() {
    let table = known_fragments();
    assert!(table.windows(2).all(|w| w[0].len() >= w[1].len()));
    assert!(table.iter().all(|f| f.len() >= MIN_FRAGMENT_LEN));
    let boxes = table.iter().filter(|f| **f == "box").count();
    assert_eq!(boxes, 1);
}
