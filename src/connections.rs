//! Heuristic word-similarity scoring.
//!
//! Produces the weighted "relatedness" edges the constellation view draws
//! between words. The score is a hand-tuned heuristic, not a metric
//! distance: shared letters, similar lengths, shared bigrams, and matching
//! edge letters all add weight, and the total is normalized by word length.
//!
//! No symmetry is enforced structurally: `find_connections(a, ...)` and
//! `find_connections(b, ...)` are computed independently, and callers
//! reconcile bidirectional edges themselves.

use crate::letters::LetterSet;

/// Weights for the individual scoring signals.
const EQUAL_LENGTH_BONUS: usize = 2;
const NEAR_LENGTH_BONUS: usize = 1;
const SHARED_BIGRAM_WEIGHT: usize = 2;
const EDGE_LETTER_BONUS: usize = 1;

/// Admission thresholds: a candidate is kept when its normalized strength
/// clears `STRENGTH_FLOOR` *or* it shares at least `MIN_SHARED_LETTERS`
/// distinct letters with the query word. The OR deliberately lets plenty of
/// weak matches through so short words still grow a constellation.
const STRENGTH_FLOOR: f64 = 0.1;
const MIN_SHARED_LETTERS: usize = 2;

/// A scored edge from the query word to a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub word: String,
    /// Normalized relatedness in `[0, 1]`.
    pub strength: f64,
}

/// Raw heuristic score plus the shared-distinct-letter count.
///
/// The raw score adds up:
/// - the number of distinct letters both words share (set, not multiset),
/// - a length bonus (equal lengths, or lengths one apart),
/// - a bigram bonus for every contiguous 2-letter slice of `word` found
///   anywhere in `other`,
/// - an edge bonus each for matching first and last letters.
fn raw_score(word: &str, other: &str) -> (usize, usize) {
    let shared = LetterSet::from_word(word)
        .intersection(LetterSet::from_word(other))
        .len();
    let mut score = shared;

    match word.len().abs_diff(other.len()) {
        0 => score += EQUAL_LENGTH_BONUS,
        1 => score += NEAR_LENGTH_BONUS,
        _ => {}
    }

    // entries are ASCII A-Z, so byte windows are character windows
    let other_bytes = other.as_bytes();
    for pair in word.as_bytes().windows(2) {
        if other_bytes.windows(2).any(|w| w == pair) {
            score += SHARED_BIGRAM_WEIGHT;
        }
    }

    if word.as_bytes().first() == other_bytes.first() {
        score += EDGE_LETTER_BONUS;
    }
    if word.as_bytes().last() == other_bytes.last() {
        score += EDGE_LETTER_BONUS;
    }

    (score, shared)
}

/// Normalized strength of the `word`/`other` pairing, before clamping.
fn normalized_score(word: &str, other: &str) -> (f64, usize) {
    let (score, shared) = raw_score(word, other);
    let avg_length = (word.len() + other.len()) as f64 / 2.0;
    (score as f64 / (avg_length * 2.0), shared)
}

/// Score every candidate in `pool` against `word` and return the strongest
/// connections, at most `max_results` of them.
///
/// Candidates equal to `word` are skipped. Admission uses the
/// floor-or-shared-letters rule above; reported strengths are clamped to
/// 1.0. The sort is stable and descending, so equal strengths keep their
/// pool order.
pub fn find_connections<'a, I>(word: &str, pool: I, max_results: usize) -> Vec<Connection>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut connections: Vec<Connection> = Vec::new();

    for other in pool {
        if other == word {
            continue;
        }

        let (strength, shared) = normalized_score(word, other);
        if strength > STRENGTH_FLOOR || shared >= MIN_SHARED_LETTERS {
            connections.push(Connection {
                word: other.to_string(),
                strength: strength.min(1.0),
            });
        }
    }

    connections.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    connections.truncate(max_results);
    connections
}
