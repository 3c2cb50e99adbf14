//! Error types for the query boundary, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (Q001-Q008) for documentation lookup:
//!
//! - Q001: `EmptyPattern` (Pattern contains no letters or wildcards)
//! - Q002: `PatternLengthOutOfRange` (Pattern length outside the supported range)
//! - Q003: `LengthTooShortForPattern` (Explicit length shorter than the written pattern)
//! - Q004: `InvalidPatternChar` (Character other than A-Z or '?')
//! - Q005: `PoolTooShort` (Anagram letter pool below the minimum size)
//! - Q006: `EmptyTarget` (Empty rebus/scramble target or connection word)
//! - Q007: `RegexError` (Prefilter regex failed to compile)
//! - Q008: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use asterism::errors::QueryError;
//!
//! fn check_target(target: &str) -> Result<(), Box<QueryError>> {
//!     if target.is_empty() {
//!         return Err(Box::new(QueryError::EmptyTarget));
//!     }
//!     Ok(())
//! }
//!
//! match check_target("") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Custom error type for query validation and pattern parsing
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Pattern length {len} is outside 1-{max}")]
    PatternLengthOutOfRange { len: usize, max: usize },

    #[error("Requested length {length} is shorter than the pattern ({pattern_len} slots)")]
    LengthTooShortForPattern { length: usize, pattern_len: usize },

    #[error("Invalid character '{invalid_char}' in pattern (only A-Z and '?' allowed)")]
    InvalidPatternChar { invalid_char: char },

    #[error("Letter pool \"{pool}\" has {len} letters; at least {min} required")]
    PoolTooShort { pool: String, len: usize, min: usize },

    #[error("Empty search target")]
    EmptyTarget,

    #[error("Invalid prefilter regex: {0}")]
    RegexError(#[from] fancy_regex::Error),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<Box<fancy_regex::Error>> for Box<QueryError> {
    fn from(e: Box<fancy_regex::Error>) -> Self {
        Box::new(QueryError::RegexError(*e))
    }
}

impl<'a> NomParseError<&'a str> for Box<QueryError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(QueryError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        // usually just return the existing error unchanged
        other
    }
}

impl QueryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::EmptyPattern => "Q001",
            QueryError::PatternLengthOutOfRange { .. } => "Q002",
            QueryError::LengthTooShortForPattern { .. } => "Q003",
            QueryError::InvalidPatternChar { .. } => "Q004",
            QueryError::PoolTooShort { .. } => "Q005",
            QueryError::EmptyTarget => "Q006",
            QueryError::RegexError(_) => "Q007",
            QueryError::NomError(_) => "Q008",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            QueryError::EmptyPattern => Some("Type letters and '?' wildcards, e.g. 'C?T' or 'S???E'"),
            QueryError::PatternLengthOutOfRange { .. } => Some("Patterns cover words of 1 to 20 letters"),
            QueryError::LengthTooShortForPattern { .. } => Some("The requested length must be at least as long as the written pattern; drop --length to use the pattern's own length"),
            QueryError::InvalidPatternChar { .. } => Some("Patterns may contain only uppercase letters A-Z and the '?' wildcard"),
            QueryError::PoolTooShort { .. } => Some("Give at least 3 letters to draw anagrams from, e.g. 'CATS'"),
            QueryError::EmptyTarget => Some("Give at least one letter to search for, e.g. 'AT'"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
