//! `word_list` — Module to load and preprocess the word list for Asterism
//!
//! This module is responsible for reading a word list, either from a file or
//! from an in-memory string (the latter is what the unit and integration
//! tests use).
//!
//! The output is a `WordList` struct containing a flat `Vec<String>` of
//! uppercase words.
//!
//! The parsing logic:
//! - Each line in the input is expected to hold a single word.
//! - Lines containing a semicolon are annotations, not words, and are dropped.
//! - All kept words are normalized to uppercase.
//! - Any entry that still contains a non-A-Z character after normalization
//!   (digits, apostrophes, accents) is dropped, so every stored word
//!   satisfies the A-Z invariant the search modules rely on.
//! - Source order is preserved, and so are duplicates — the source file
//!   makes no dedup guarantee and neither do we.
//!
//! The list is constructed once, before any query runs, and is read-only
//! afterwards: queries borrow it, nothing mutates it.

/// Struct representing a processed, ready-to-use word list.
///
/// The stored words are all non-empty and uppercase A-Z, in source order.
/// The field is private so the list stays immutable after construction;
/// queries read it through [`WordList::iter`] / [`WordList::words`].
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of uppercase words.
    /// Example: `["ABLE", "ACID", "ACORN", ...]`
    words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents as a `&str`, one word per line.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims surrounding whitespace.
    /// 2. Skips empty lines and lines containing a `;` (annotations).
    /// 3. Uppercases each kept line.
    /// 4. Drops entries containing anything other than A-Z.
    ///
    /// Order and duplicates are preserved.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();

                if line.is_empty() || line.contains(';') {
                    return None;
                }

                let word = line.to_uppercase();

                // A digit, apostrophe or accent survives uppercasing; such
                // entries would break the A-Z invariant, so drop them here.
                if word.chars().all(|c| c.is_ascii_uppercase()) {
                    Some(word)
                } else {
                    None
                }
            })
            .collect();

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Example:
    /// `let words = WordList::load_from_path("data/words.txt")?;`
    /// `println!("Loaded {} words", words.len());`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// The words, in source order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words as `&str`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "cat\ndog\nbird";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_parse_drops_annotation_lines() {
        let input = "cat\nobsolete; do not use\ndog";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_normalizes_to_uppercase() {
        let input = "Cat\ndOG\nBIRD";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let input = "zebra\ncat\nzebra\nape";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["ZEBRA", "CAT", "ZEBRA", "APE"]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "cat\n\n\ndog\n\n";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_drops_non_alphabetic_entries() {
        let input = "cat\nit's\nnumber1\ndog";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let input = "  cat  \n\tdog\t";
        let words = WordList::parse_from_str(input);

        assert_eq!(words.words(), &["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let words = WordList::parse_from_str("");

        assert!(words.is_empty());
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn test_iter_yields_strs() {
        let words = WordList::parse_from_str("cat\ndog");
        let collected: Vec<&str> = words.iter().collect();

        assert_eq!(collected, vec!["CAT", "DOG"]);
    }
}
