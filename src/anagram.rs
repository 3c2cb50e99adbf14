//! Subset-anagram solving over the word list.
//!
//! A candidate is formable from a letter pool when every one of its letters
//! can be drawn from the pool without exceeding any letter's multiplicity.
//! The pool need not be fully used: `"CAT"` is formable from `"CATS"`.

use crate::letters::LetterCounts;
use crate::search::SearchResults;
use crate::word_list::WordList;

/// Shortest word worth reporting as an anagram result.
pub const MIN_WORD_LEN: usize = 3;

/// Return `true` if `candidate` can be assembled from the letters in `pool`.
///
/// Walks the candidate's letters, consuming one pool occurrence per letter;
/// any letter requested beyond its pool count fails the whole candidate.
#[must_use]
pub fn can_form(candidate: &str, pool: &LetterCounts) -> bool {
    let mut remaining = pool.clone();
    candidate.chars().all(|c| remaining.take(c))
}

/// Scan the word list for subset-anagrams of `pool_text`.
///
/// Candidates are restricted to lengths `MIN_WORD_LEN ..= pool_text.len()`,
/// and the query string itself is never reported. Results are sorted by
/// descending length (longest, most interesting finds first), then
/// alphabetically within a length, and capped at `max_results`.
///
/// `pool_text` must already be normalized to uppercase A-Z.
#[must_use]
pub fn solve(words: &WordList, pool_text: &str, max_results: usize) -> SearchResults<String> {
    let pool = LetterCounts::from_word(pool_text);

    let mut matches: Vec<String> = words
        .iter()
        .filter(|word| word.len() >= MIN_WORD_LEN && word.len() <= pool_text.len())
        .filter(|word| *word != pool_text)
        .filter(|word| can_form(word, &pool))
        .map(str::to_string)
        .collect();

    matches.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    SearchResults::capped(matches, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(words: &[&str]) -> WordList {
        WordList::parse_from_str(&words.join("\n"))
    }

    #[test]
    fn test_can_form_subset() {
        let pool = LetterCounts::from_word("CATS");
        assert!(can_form("CAT", &pool));
        assert!(can_form("ACTS", &pool));
        assert!(can_form("AT", &pool));
    }

    #[test]
    fn test_can_form_respects_multiplicity() {
        // LETTER holds two Ts and two Es
        let pool = LetterCounts::from_word("LETTER");
        assert!(can_form("LET", &pool));
        assert!(can_form("EE", &pool));
        assert!(!can_form("TTT", &pool));
        assert!(!can_form("EEE", &pool));
    }

    #[test]
    fn test_can_form_missing_letter() {
        let pool = LetterCounts::from_word("CATS");
        assert!(!can_form("CART", &pool)); // no R in the pool
        assert!(!can_form("DOG", &pool));
    }

    #[test]
    fn test_solve_orders_by_length_then_alpha() {
        let words = word_list(&["CAT", "CATS", "SCAT", "ACTS", "ARTS", "CART", "TORN", "RATS"]);
        let results = solve(&words, "CATS", 500);

        // four-letter finds first, alphabetical within a length
        assert_eq!(results.matches, vec!["ACTS", "SCAT", "CAT"]);
    }

    #[test]
    fn test_solve_never_returns_the_query_itself() {
        let words = word_list(&["CATS", "CAT", "ACTS"]);
        let results = solve(&words, "CATS", 500);

        assert!(!results.matches.contains(&"CATS".to_string()));
    }

    #[test]
    fn test_solve_skips_words_below_min_length() {
        let words = word_list(&["AT", "CAT"]);
        let results = solve(&words, "CATS", 500);

        assert_eq!(results.matches, vec!["CAT"]);
    }

    #[test]
    fn test_solve_skips_words_longer_than_pool() {
        let words = word_list(&["STACKS"]);
        let results = solve(&words, "CATS", 500);

        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_solve_results_are_sub_multisets_of_pool() {
        let words = word_list(&["CAT", "CATS", "SCAT", "ACTS", "ARTS", "CART", "TORN", "RATS"]);
        let pool = LetterCounts::from_word("CATS");
        let results = solve(&words, "CATS", 500);

        for word in &results.matches {
            assert!(can_form(word, &pool), "{word} should be formable from CATS");
        }
    }

    #[test]
    fn test_solve_respects_cap() {
        let words = word_list(&["CAT", "ACT", "SAC", "TAS", "ACTS", "SCAT"]);
        let results = solve(&words, "CATS", 3);

        assert_eq!(results.matches.len(), 3);
        assert_eq!(results.total_matches, 6);
        assert!(results.is_truncated());
    }
}
