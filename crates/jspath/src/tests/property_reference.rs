//! Cross-checks the scanner against a regex tokenizer that finds all
//! non-overlapping token matches and keeps the leading run without gaps.
//!
//! Bracket errors are compared too: the scanner must fail exactly where the
//! reference prefix ends, on a `[` that starts no token.

use alloc::vec::Vec;
use std::sync::LazyLock;

use quickcheck::{QuickCheck, TestResult};
use regex::Regex;

use super::arbitrary::{PathText, test_count};
use crate::{ParseError, Path};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:^[0-9A-Za-z_]+)|(?:\.[0-9A-Za-z_]+)|(?:\[-?[0-9]+\])|(?:\["(?:[^"\\\x00-\x1f]|\\["\\/bfnrt]|\\u[0-9A-Fa-f]{4})*"\])"#,
    )
    .unwrap()
});

/// Returns the token spans of the longest gap-free prefix of `s`.
fn reference_tokens(s: &str) -> Vec<(usize, usize)> {
    if s.starts_with('.') {
        return Vec::new();
    }
    let mut spans = Vec::new();
    let mut last = 0;
    for m in TOKEN.find_iter(s) {
        if m.start() != last {
            break;
        }
        last = m.end();
        spans.push((m.start(), m.end()));
    }
    spans
}

#[test]
fn matches_reference_tokenizer_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: PathText) -> TestResult {
        let spans = reference_tokens(&text.0);
        let reference_end = spans.last().map_or(0, |&(_, end)| end);
        match Path::from_js_partial(&text.0) {
            Ok((path, consumed)) => {
                TestResult::from_bool(spans.len() == path.len() && reference_end == consumed)
            }
            Err(ParseError::Bracket { offset, .. }) => TestResult::from_bool(
                reference_end == offset
                    && text.0[offset..].starts_with('[')
                    && !TOKEN
                        .find_at(&text.0, offset)
                        .is_some_and(|m| m.start() == offset),
            ),
            Err(ParseError::Incomplete { .. }) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(PathText) -> TestResult);
}

#[test]
fn reference_tokenizer_sanity() {
    assert_eq!(
        reference_tokens(r#"a["b c"][1].d"#),
        [(0, 1), (1, 8), (8, 11), (11, 13)]
    );
    assert_eq!(reference_tokens("outputs.[0]"), [(0, 7)]);
    assert!(reference_tokens(".a").is_empty());
    assert_eq!(reference_tokens(r#"["a"][01]["\/"]"#), [(0, 5), (5, 9), (9, 15)]);
    assert_eq!(reference_tokens(r#"a["\q"]"#), [(0, 1)]);
}
