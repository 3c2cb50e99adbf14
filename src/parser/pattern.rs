//! Tokenizer for letter/wildcard patterns.
//!
//! A pattern is a fixed-length sequence of slots: a letter slot (`C`)
//! requires that exact letter at its position, a wildcard slot (`?`)
//! accepts any letter. `"C?T"` describes three-letter words starting with
//! C and ending with T.

use super::prefilter::build_prefilter;
use crate::errors::QueryError;
use fancy_regex::Regex;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::satisfy;
use nom::combinator::map;
use nom::{IResult, Parser};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `QueryError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<QueryError>>;

/// A single parsed position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// 'A'-'Z': this exact letter must appear at this position
    Letter(char),
    /// '?': any letter is accepted at this position
    Any,
}

/// A tokenized pattern along with a compiled regex prefilter.
///
/// The prefilter encodes the same slots as an anchored regex and is used to
/// reject non-matching words cheaply during a list scan; the authoritative
/// check is the position-by-position comparison in
/// [`matches_pattern`](super::matcher::matches_pattern).
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    pub(crate) slots: Vec<Slot>,
    pub(crate) prefilter: Regex,
}

impl ParsedPattern {
    fn of(slots: Vec<Slot>) -> Result<Self, Box<QueryError>> {
        let prefilter = build_prefilter(&slots)?;
        Ok(ParsedPattern { slots, prefilter })
    }

    /// Parse `raw` and pad it with trailing wildcards up to `length`.
    ///
    /// This is how the UI's "empty boxes" are expressed: a user who typed
    /// `CA` into a five-box row is searching for `CA???`. An empty `raw`
    /// with a nonzero `length` is the all-wildcard pattern of that length.
    ///
    /// # Errors
    ///
    /// - [`QueryError::LengthTooShortForPattern`] if `length` is smaller
    ///   than the number of slots written in `raw`.
    /// - [`QueryError::EmptyPattern`] if both `raw` and `length` are empty.
    /// - Any error `raw` itself fails to parse with.
    pub fn with_length(raw: &str, length: usize) -> Result<Self, Box<QueryError>> {
        let mut slots = parse_slots(raw)?;
        if length < slots.len() {
            return Err(Box::new(QueryError::LengthTooShortForPattern {
                length,
                pattern_len: slots.len(),
            }));
        }
        slots.resize(length, Slot::Any);
        if slots.is_empty() {
            return Err(Box::new(QueryError::EmptyPattern));
        }
        Self::of(slots)
    }

    /// Number of slots, i.e. the exact word length this pattern selects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots, in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

/// Renders the pattern back in its input notation, e.g. `C?T??`.
impl fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Letter(c) => write!(f, "{c}")?,
                Slot::Any => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

impl FromStr for ParsedPattern {
    type Err = Box<QueryError>;

    /// Parse a pattern string into a `ParsedPattern`.
    ///
    /// The pattern's length is the number of characters written; use
    /// [`ParsedPattern::with_length`] to pad with trailing wildcards.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let slots = parse_slots(raw)?;
        if slots.is_empty() {
            return Err(Box::new(QueryError::EmptyPattern));
        }
        ParsedPattern::of(slots)
    }
}

/// Walk the input, consuming slot tokens one at a time. An empty input
/// yields an empty slot vector; callers decide whether that is an error.
fn parse_slots(raw: &str) -> Result<Vec<Slot>, Box<QueryError>> {
    let mut rest = raw;
    let mut slots = Vec::new();

    while !rest.is_empty() {
        match slot_token(rest) {
            Ok((next, slot)) => {
                slots.push(slot);
                rest = next;
            }
            Err(_) => {
                // the token parsers only fail at an unsupported character
                return Err(Box::new(QueryError::InvalidPatternChar {
                    invalid_char: rest.chars().next().unwrap_or('?'),
                }));
            }
        }
    }

    Ok(slots)
}

// === Token parsers ===

fn letter(input: &'_ str) -> PResult<'_, Slot> {
    map(satisfy(|c| c.is_ascii_uppercase()), Slot::Letter).parse(input)
}

fn wildcard(input: &'_ str) -> PResult<'_, Slot> {
    map(tag("?"), |_| Slot::Any).parse(input)
}

fn slot_token(input: &'_ str) -> PResult<'_, Slot> {
    alt((letter, wildcard)).parse(input)
}
