//! The query boundary: normalization, validation, dispatch, and summaries.
//!
//! The UI layer hands over raw text; this module is where it gets cleaned
//! up (uppercased, stripped of stray characters) and checked before any
//! scan runs. The search modules themselves never validate; by the time
//! they see a query it is well-formed, and "no matches" is an empty result,
//! never an error.

use crate::anagram;
use crate::connections::{self, Connection};
use crate::errors::QueryError;
use crate::hidden::{self, RebusMatch, ScrambleMatch};
use crate::parser::{self, ParsedPattern};
use crate::word_list::WordList;

use log::debug;

/// Longest supported pattern. The pattern boxes in the UI top out here.
pub const MAX_PATTERN_LEN: usize = 20;

/// Minimum number of letters in an anagram pool.
pub const MIN_POOL_LEN: usize = 3;

/// A validated-shape search request. Fields hold raw user text;
/// [`run_query`] normalizes and validates before dispatching.
#[derive(Debug, Clone)]
pub enum Query {
    /// Letter/wildcard pattern search, optionally padded to `length`.
    Pattern { text: String, length: Option<usize> },
    /// Subset-anagram search over a pool of letters.
    Anagram { pool: String },
    /// Buried-exact-substring search.
    Rebus { target: String },
    /// Scrambled-window search.
    Scrambled { target: String },
    /// Similarity scoring against the `min_len..=max_len` slice of the list.
    Connections { word: String, min_len: usize, max_len: usize },
}

/// The sorted, capped outcome of a list scan.
///
/// `total_matches` counts every match found before the cap was applied, so
/// summaries can report "showing first N of M".
#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    pub matches: Vec<T>,
    pub total_matches: usize,
}

impl<T> SearchResults<T> {
    /// Record the full match count, then truncate to `max_results`.
    pub(crate) fn capped(mut full: Vec<T>, max_results: usize) -> Self {
        let total_matches = full.len();
        full.truncate(max_results);
        SearchResults { matches: full, total_matches }
    }

    /// True if the cap dropped any matches.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.matches.len() < self.total_matches
    }
}

/// Typed results of a [`run_query`] call.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Pattern and anagram searches return bare words.
    Words(SearchResults<String>),
    Rebus(SearchResults<RebusMatch>),
    Scrambled(SearchResults<ScrambleMatch>),
    Connections(Vec<Connection>),
}

/// Uppercase `raw` and keep only the letters A-Z.
fn normalize_letters(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Uppercase `raw` and keep letters plus the `?` wildcard.
fn normalize_pattern(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '?')
        .collect()
}

/// The pattern as the user will see it echoed back: normalized and padded
/// with trailing wildcards to the requested length.
fn padded_pattern(normalized: &str, length: Option<usize>) -> String {
    let mut shown = normalized.to_string();
    if let Some(len) = length {
        while shown.chars().count() < len {
            shown.push('?');
        }
    }
    shown
}

/// Validate `query`, normalize its text, and run the matching scan.
///
/// `max_results` caps every search; the UI's conventional value is 500 but
/// the decision belongs to the caller.
///
/// # Errors
///
/// Returns a [`QueryError`] when the query is malformed (empty pattern,
/// out-of-range length, undersized pool, empty target). A well-formed
/// query that matches nothing succeeds with empty results.
pub fn run_query(
    query: &Query,
    words: &WordList,
    max_results: usize,
) -> Result<Outcome, QueryError> {
    match query {
        Query::Pattern { text, length } => {
            let text = normalize_pattern(text);
            if text.is_empty() && length.is_none() {
                return Err(QueryError::EmptyPattern);
            }

            let target_len = length.unwrap_or_else(|| text.chars().count());
            if !(1..=MAX_PATTERN_LEN).contains(&target_len) {
                return Err(QueryError::PatternLengthOutOfRange {
                    len: target_len,
                    max: MAX_PATTERN_LEN,
                });
            }

            let pattern = ParsedPattern::with_length(&text, target_len).map_err(|e| *e)?;
            debug!("pattern query \"{pattern}\" over {} words", words.len());
            Ok(Outcome::Words(parser::find_matches(words, &pattern, max_results)))
        }

        Query::Anagram { pool } => {
            let pool = normalize_letters(pool);
            if pool.len() < MIN_POOL_LEN {
                return Err(QueryError::PoolTooShort {
                    len: pool.len(),
                    pool,
                    min: MIN_POOL_LEN,
                });
            }

            debug!("anagram query \"{pool}\" over {} words", words.len());
            Ok(Outcome::Words(anagram::solve(words, &pool, max_results)))
        }

        Query::Rebus { target } => {
            let target = normalize_letters(target);
            if target.is_empty() {
                return Err(QueryError::EmptyTarget);
            }

            debug!("rebus query \"{target}\" over {} words", words.len());
            Ok(Outcome::Rebus(hidden::find_rebus(words, &target, max_results)))
        }

        Query::Scrambled { target } => {
            let target = normalize_letters(target);
            if target.is_empty() {
                return Err(QueryError::EmptyTarget);
            }

            debug!("scramble query \"{target}\" over {} words", words.len());
            Ok(Outcome::Scrambled(hidden::find_scrambled(words, &target, max_results)))
        }

        Query::Connections { word, min_len, max_len } => {
            let word = normalize_letters(word);
            if word.is_empty() {
                return Err(QueryError::EmptyTarget);
            }

            let pool = words
                .iter()
                .filter(|w| (*min_len..=*max_len).contains(&w.len()));
            debug!("connection query \"{word}\" over the {min_len}-{max_len} letter slice");
            Ok(Outcome::Connections(connections::find_connections(&word, pool, max_results)))
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn truncation_note<T>(results: &SearchResults<T>) -> String {
    if results.is_truncated() {
        format!(" (showing first {})", results.matches.len())
    } else {
        String::new()
    }
}

/// Render the one-line human-readable summary the UI shows under a result
/// panel, e.g. `Found 3 words matching pattern "C?T??"`.
#[must_use]
pub fn summary(query: &Query, outcome: &Outcome) -> String {
    match (query, outcome) {
        (Query::Pattern { text, length }, Outcome::Words(results)) => {
            let shown = padded_pattern(&normalize_pattern(text), *length);
            let n = results.total_matches;
            if n == 0 {
                format!("No words found matching pattern \"{shown}\"")
            } else {
                format!(
                    "Found {n} word{} matching pattern \"{shown}\"{}",
                    plural(n),
                    truncation_note(results)
                )
            }
        }
        (Query::Anagram { pool }, Outcome::Words(results)) => {
            let shown = normalize_letters(pool);
            let n = results.total_matches;
            if n == 0 {
                format!("No words can be formed from \"{shown}\"")
            } else {
                format!(
                    "Found {n} word{} formable from \"{shown}\"{}",
                    plural(n),
                    truncation_note(results)
                )
            }
        }
        (Query::Rebus { target }, Outcome::Rebus(results)) => {
            let shown = normalize_letters(target);
            let n = results.total_matches;
            if n == 0 {
                format!("No words found hiding \"{shown}\"")
            } else {
                format!(
                    "Found {n} word{} hiding \"{shown}\"{}",
                    plural(n),
                    truncation_note(results)
                )
            }
        }
        (Query::Scrambled { target }, Outcome::Scrambled(results)) => {
            let shown = normalize_letters(target);
            let n = results.total_matches;
            if n == 0 {
                format!("No words found containing a scrambled \"{shown}\"")
            } else {
                format!(
                    "Found {n} word{} containing a scrambled \"{shown}\"{}",
                    plural(n),
                    truncation_note(results)
                )
            }
        }
        (Query::Connections { word, .. }, Outcome::Connections(found)) => {
            let shown = normalize_letters(word);
            let n = found.len();
            if n == 0 {
                format!("No connections found for \"{shown}\"")
            } else {
                format!("Found {n} connection{} for \"{shown}\"", plural(n))
            }
        }
        // a mismatched query/outcome pairing only arises through misuse;
        // there is nothing sensible to report
        _ => String::new(),
    }
}
