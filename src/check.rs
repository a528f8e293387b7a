//! Prefix/suffix matching, equality and substring counting.
//!
//! Every `limit` parameter counts characters of the pattern; `0` means the
//! whole pattern is checked.

use serde::{Deserialize, Serialize};

use crate::case::Case;

/// Number of bytes to check for a pattern of `len` bytes under `limit`.
fn checked_len(len: usize, limit: usize) -> usize {
    if limit == 0 { len } else { limit.min(len) }
}

/// Checks if `s` begins with `prefix`.
///
/// The same slice passed twice is always a match. Otherwise an empty subject,
/// an empty prefix, or a prefix longer than the subject never matches.
pub fn begin_with(s: &str, prefix: &str, case: Case, limit: usize) -> bool {
    if std::ptr::eq(s, prefix) {
        return true;
    }
    if prefix.len() > s.len() || s.is_empty() || prefix.is_empty() {
        return false;
    }
    let n = checked_len(prefix.len(), limit);
    case.eq_bytes(&s.as_bytes()[..n], &prefix.as_bytes()[..n])
}

/// Checks if `s` ends with `suffix`. Mirrors [`begin_with`], counting `limit`
/// from the end.
pub fn end_with(s: &str, suffix: &str, case: Case, limit: usize) -> bool {
    if std::ptr::eq(s, suffix) {
        return true;
    }
    if suffix.len() > s.len() || s.is_empty() || suffix.is_empty() {
        return false;
    }
    let n = checked_len(suffix.len(), limit);
    case.eq_bytes(
        &s.as_bytes()[s.len() - n..],
        &suffix.as_bytes()[suffix.len() - n..],
    )
}

/// Compares two strings. With a non-zero `limit`, matching the first `limit`
/// characters is enough even if the strings differ afterwards.
pub fn compare(a: &str, b: &str, case: Case, limit: usize) -> bool {
    let matched = a
        .bytes()
        .zip(b.bytes())
        .take_while(|&(x, y)| case.eq_byte(x, y))
        .count();
    if limit > 0 && matched >= limit {
        return true;
    }
    matched == a.len() && matched == b.len()
}

/// Counts the non-overlapping occurrences of `needle` inside `haystack`.
pub fn count(haystack: &str, needle: &str, case: Case) -> usize {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if hay.is_empty() || pat.is_empty() {
        return 0;
    }
    let mut found = 0;
    let mut pos = 0;
    while pos + pat.len() <= hay.len() {
        if case.eq_bytes(&hay[pos..pos + pat.len()], pat) {
            found += 1;
            pos += pat.len();
        } else {
            pos += 1;
        }
    }
    found
}

/// True if `prefix` is an abbreviation of `s`: a prefix of it that is at
/// least `min_length` characters long.
pub fn is_abbreviation_of(prefix: &str, s: &str, case: Case, min_length: usize) -> bool {
    prefix.len() >= min_length && begin_with(s, prefix, case, 0)
}

/// Which kinds of match [`word_is_among`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    pub case: Case,
    /// The entry equals the word.
    pub exact: bool,
    /// The entry begins with the word.
    pub prefix: bool,
    /// The entry ends with the word.
    pub suffix: bool,
}

impl MatchPolicy {
    /// Exact match only.
    pub fn exact(case: Case) -> Self {
        Self {
            case,
            exact: true,
            ..Self::default()
        }
    }

    fn matches(&self, word: &str, entry: &str) -> bool {
        (self.exact && compare(word, entry, self.case, 0))
            || (self.prefix && begin_with(entry, word, self.case, 0))
            || (self.suffix && end_with(entry, word, self.case, 0))
    }
}

/// True if `word` matches any of `words` under `policy`.
pub fn word_is_among<S: AsRef<str>>(word: &str, words: &[S], policy: MatchPolicy) -> bool {
    words.iter().any(|entry| policy.matches(word, entry.as_ref()))
}
