//! Buried-word searches.
//!
//! Two scans share the "does this word contain the target as a window"
//! shape but differ in the equality rule:
//!
//! - **Rebus**: the target appears verbatim, buried strictly inside the
//!   word, not flush with either edge. `AT` hides in `C[AT]S` but not in
//!   `ATLAS` (flush left) or `SPLAT` (flush right).
//! - **Scramble**: a window of the word holds exactly the target's letters
//!   in some *other* order. A window spelling the target itself is not a
//!   scramble; that's the rebus scan's territory.
//!
//! Both report the first qualifying position per word so the UI can
//! highlight the span.

use crate::letters::LetterCounts;
use crate::search::SearchResults;
use crate::word_list::WordList;

/// A word hiding the target verbatim at an interior position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebusMatch {
    pub word: String,
    /// Byte/char position of the occurrence (entries are ASCII A-Z).
    pub pos: usize,
    /// Length of the hidden target.
    pub len: usize,
}

/// A word containing the target's letters as a reordered window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleMatch {
    pub word: String,
    /// Position of the first scrambled window.
    pub pos: usize,
    /// Window length (the target's length).
    pub len: usize,
}

impl RebusMatch {
    /// Render the word with the hidden span bracketed, e.g. `C[AT]S`.
    #[must_use]
    pub fn highlight(&self) -> String {
        highlight_span(&self.word, self.pos, self.len)
    }
}

impl ScrambleMatch {
    /// Render the word with the scrambled window bracketed, e.g. `S[CAT]`.
    #[must_use]
    pub fn highlight(&self) -> String {
        highlight_span(&self.word, self.pos, self.len)
    }
}

fn highlight_span(word: &str, pos: usize, len: usize) -> String {
    format!(
        "{}[{}]{}",
        &word[..pos],
        &word[pos..pos + len],
        &word[pos + len..]
    )
}

/// First position where `target` occurs verbatim strictly inside `word`:
/// the occurrence must start after the first letter and end before the
/// last. Returns `None` for words not longer than the target.
fn first_interior_occurrence(word: &str, target: &str) -> Option<usize> {
    let w = word.as_bytes();
    let t = target.as_bytes();
    if t.is_empty() || w.len() <= t.len() {
        return None;
    }

    // positions 1 ..= w.len() - t.len() - 1 keep the occurrence off both edges
    (1..w.len() - t.len()).find(|&pos| &w[pos..pos + t.len()] == t)
}

/// First position where a window of `word` is a reordering of `target`.
///
/// The window's letter multiset must equal the target's, and its literal
/// text must differ from the target (true scrambles only). Maintains a
/// rolling `LetterCounts` over the window rather than recounting at every
/// position.
fn first_scrambled_window(word: &str, target: &str, target_counts: &LetterCounts) -> Option<usize> {
    let w = word.as_bytes();
    let tlen = target.len();
    if tlen == 0 || w.len() < tlen {
        return None;
    }

    let mut window = LetterCounts::from_word(&word[..tlen]);
    let mut pos = 0;
    loop {
        if window == *target_counts && &word[pos..pos + tlen] != target {
            return Some(pos);
        }
        if pos + tlen >= w.len() {
            return None;
        }
        window.remove(w[pos] as char);
        window.add(w[pos + tlen] as char);
        pos += 1;
    }
}

/// Scan the word list for words hiding `target` as a buried exact substring.
///
/// Results are sorted by ascending word length (tightest hides first), then
/// alphabetically, and capped at `max_results`. `target` must already be
/// normalized to uppercase A-Z.
#[must_use]
pub fn find_rebus(words: &WordList, target: &str, max_results: usize) -> SearchResults<RebusMatch> {
    let mut matches: Vec<RebusMatch> = words
        .iter()
        .filter_map(|word| {
            first_interior_occurrence(word, target).map(|pos| RebusMatch {
                word: word.to_string(),
                pos,
                len: target.len(),
            })
        })
        .collect();

    sort_by_length_then_alpha(&mut matches, |m| &m.word);

    SearchResults::capped(matches, max_results)
}

/// Scan the word list for words containing a scrambled window of `target`.
///
/// Same ordering and cap as [`find_rebus`]. `target` must already be
/// normalized to uppercase A-Z.
#[must_use]
pub fn find_scrambled(
    words: &WordList,
    target: &str,
    max_results: usize,
) -> SearchResults<ScrambleMatch> {
    let target_counts = LetterCounts::from_word(target);

    let mut matches: Vec<ScrambleMatch> = words
        .iter()
        .filter_map(|word| {
            first_scrambled_window(word, target, &target_counts).map(|pos| ScrambleMatch {
                word: word.to_string(),
                pos,
                len: target.len(),
            })
        })
        .collect();

    sort_by_length_then_alpha(&mut matches, |m| &m.word);

    SearchResults::capped(matches, max_results)
}

fn sort_by_length_then_alpha<T, F: Fn(&T) -> &String>(matches: &mut [T], word_of: F) {
    matches.sort_by(|a, b| {
        let (a, b) = (word_of(a), word_of(b));
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(words: &[&str]) -> WordList {
        WordList::parse_from_str(&words.join("\n"))
    }

    #[test]
    fn test_rebus_finds_buried_target() {
        let words = word_list(&["CATS"]);
        let results = find_rebus(&words, "AT", 500);

        assert_eq!(results.matches.len(), 1);
        let m = &results.matches[0];
        assert_eq!(m.word, "CATS");
        assert_eq!(m.pos, 1);
        assert_eq!(m.highlight(), "C[AT]S");
    }

    #[test]
    fn test_rebus_rejects_flush_left() {
        // AT starts ATLAS, so it is not buried
        let words = word_list(&["ATLAS"]);
        let results = find_rebus(&words, "AT", 500);

        // ATLAS has no other occurrence of AT
        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_rebus_rejects_flush_right() {
        let words = word_list(&["SPLAT", "SCAT"]);
        let results = find_rebus(&words, "AT", 500);

        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_rebus_rejects_whole_word() {
        let words = word_list(&["AT"]);
        let results = find_rebus(&words, "AT", 500);

        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_rebus_takes_first_interior_occurrence() {
        // RATATAT: AT occurs at 1, 3, 5; 5 is flush right, 1 is interior
        let words = word_list(&["RATATAT"]);
        let results = find_rebus(&words, "AT", 500);

        assert_eq!(results.matches[0].pos, 1);
    }

    #[test]
    fn test_rebus_never_returns_edge_positions() {
        let words = word_list(&["CATS", "ATLAS", "SPLAT", "RATATAT", "MATTE"]);
        let results = find_rebus(&words, "AT", 500);

        for m in &results.matches {
            assert!(m.pos > 0, "{} matched at position 0", m.word);
            assert!(
                m.pos + m.len < m.word.len(),
                "{} matched flush right",
                m.word
            );
        }
    }

    #[test]
    fn test_rebus_sorts_by_length_then_alpha() {
        let words = word_list(&["PLATTER", "CATS", "BATS", "LATHE"]);
        let results = find_rebus(&words, "AT", 500);

        let found: Vec<&str> = results.matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(found, vec!["BATS", "CATS", "LATHE", "PLATTER"]);
    }

    #[test]
    fn test_scramble_finds_reordered_window() {
        // SCAT holds CAT at position 1, which reorders ACT
        let words = word_list(&["SCAT"]);
        let results = find_scrambled(&words, "ACT", 500);

        assert_eq!(results.matches.len(), 1);
        let m = &results.matches[0];
        assert_eq!(m.pos, 1);
        assert_eq!(m.len, 3);
        assert_eq!(m.highlight(), "S[CAT]");
    }

    #[test]
    fn test_scramble_excludes_verbatim_window() {
        // the only CAT-letter window in SCAT spells CAT itself
        let words = word_list(&["SCAT"]);
        let results = find_scrambled(&words, "CAT", 500);

        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_scramble_verbatim_then_reordered() {
        // TEATIME: windows of EAT are TEA(0), EAT(1), ATI(2)...
        // EAT at position 1 is verbatim, TEA at position 0 is the scramble
        let words = word_list(&["TEATIME"]);
        let results = find_scrambled(&words, "EAT", 500);

        assert_eq!(results.matches[0].pos, 0);
    }

    #[test]
    fn test_scramble_never_reports_verbatim_text() {
        let words = word_list(&["SCAT", "CATS", "ACTS", "TACT", "COAST"]);
        let results = find_scrambled(&words, "CAT", 500);

        for m in &results.matches {
            let window = &m.word[m.pos..m.pos + m.len];
            assert_ne!(window, "CAT", "{} reported a verbatim window", m.word);
        }
    }

    #[test]
    fn test_scramble_whole_word_allowed() {
        // unlike the rebus scan, a scramble may span the entire word
        let words = word_list(&["TCA"]);
        let results = find_scrambled(&words, "CAT", 500);

        assert_eq!(results.matches.len(), 1);
        assert_eq!(results.matches[0].pos, 0);
    }

    #[test]
    fn test_scramble_respects_multiplicity() {
        // target AAB needs two As in the window
        let words = word_list(&["ABAB", "BAACK"]);
        let results = find_scrambled(&words, "AAB", 500);

        let found: Vec<&str> = results.matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(found, vec!["ABAB", "BAACK"]);
    }

    #[test]
    fn test_scramble_shorter_word_never_matches() {
        let words = word_list(&["CA"]);
        let results = find_scrambled(&words, "CAT", 500);

        assert!(results.matches.is_empty());
    }

    #[test]
    fn test_searches_are_idempotent() {
        let words = word_list(&["CATS", "LATHE", "SCAT", "TEATIME"]);

        let r1 = find_rebus(&words, "AT", 500);
        let r2 = find_rebus(&words, "AT", 500);
        assert_eq!(r1.matches, r2.matches);

        let s1 = find_scrambled(&words, "ACT", 500);
        let s2 = find_scrambled(&words, "ACT", 500);
        assert_eq!(s1.matches, s2.matches);
    }
}
