//! Position-by-position pattern matching against the word list.

use crate::search::SearchResults;
use crate::word_list::WordList;

use super::pattern::{ParsedPattern, Slot};

/// Return `true` if `word` matches `pattern` exactly.
///
/// Fails closed on a length mismatch: a pattern of N slots only ever
/// matches N-letter words. Letter slots require that exact letter at their
/// position; wildcard slots accept any letter.
#[must_use]
pub fn matches_pattern(word: &str, pattern: &ParsedPattern) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() != pattern.slots.len() {
        return false;
    }

    pattern
        .slots
        .iter()
        .zip(chars)
        .all(|(slot, c)| match slot {
            Slot::Letter(required) => *required == c,
            Slot::Any => true,
        })
}

/// Scan the word list for entries matching `pattern`.
///
/// Each word passes through the pattern's regex prefilter first (a cheap
/// reject for the common case) and then the authoritative
/// [`matches_pattern`] check. Matches are sorted lexicographically
/// ascending (entries are already uppercase, so this is case-insensitive
/// order) and capped at `max_results`.
#[must_use]
pub fn find_matches(
    words: &WordList,
    pattern: &ParsedPattern,
    max_results: usize,
) -> SearchResults<String> {
    let mut matches: Vec<String> = words
        .iter()
        .filter(|word| pattern.prefilter.is_match(word).unwrap_or(false))
        .filter(|word| matches_pattern(word, pattern))
        .map(str::to_string)
        .collect();

    matches.sort();

    SearchResults::capped(matches, max_results)
}
