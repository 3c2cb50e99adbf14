//! Regex prefilters for pattern scans.
//!
//! Every parsed pattern is rendered as an anchored regex once, at parse
//! time, and that regex is used as a cheap first-pass reject while scanning
//! the word list. Compiled regexes are cached process-wide so repeated
//! queries for the same pattern don't recompile.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;

use crate::errors::QueryError;

use super::pattern::Slot;

/// Global, lazily initialized cache of compiled regexes.
///
/// - `OnceLock` ensures the cache is created at most once, on first use.
/// - The `HashMap` is wrapped in a `Mutex` for interior mutability and
///   thread safety; the lock is held only for lookups and inserts.
/// - Compilation happens outside the lock, with a double-check before
///   insert so a racing thread's entry wins.
/// - `Regex` clones are cheap (internally ref-counted), so the lock is
///   released quickly.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

/// Return a compiled `Regex` for `pattern`, caching the result.
pub(crate) fn get_regex(pattern: &str) -> Result<Regex, Box<fancy_regex::Error>> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // check cache first; if the lock is poisoned, recover and continue
    if let Ok(guard) = cache.lock() {
        if let Some(re) = guard.get(pattern).cloned() {
            return Ok(re);
        }
    }
    // if the lock was poisoned, we just compile without caching

    // Compile outside the lock.
    let compiled = Regex::new(pattern)?;

    // Insert with a double-check in case another thread inserted it meanwhile.
    // If the lock is poisoned, we still return the compiled regex (uncached).
    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

/// Render a slot sequence as a regex string: letter slots become themselves
/// (A-Z are regex-safe literals), wildcard slots become `.`.
pub(crate) fn slots_to_regex_str(slots: &[Slot]) -> String {
    let mut regex_str = String::with_capacity(slots.len());
    for slot in slots {
        match slot {
            Slot::Letter(c) => regex_str.push(*c),
            Slot::Any => regex_str.push('.'),
        }
    }
    regex_str
}

/// Compile the anchored prefilter regex for a slot sequence.
pub(crate) fn build_prefilter(slots: &[Slot]) -> Result<Regex, Box<QueryError>> {
    let anchored = format!("^{}$", slots_to_regex_str(slots));
    Ok(get_regex(&anchored)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_to_regex_str() {
        let slots = [Slot::Letter('C'), Slot::Any, Slot::Letter('T'), Slot::Any];
        assert_eq!(slots_to_regex_str(&slots), "C.T.");
    }

    #[test]
    fn test_build_prefilter_is_anchored() {
        let slots = [Slot::Letter('A'), Slot::Letter('T')];
        let re = build_prefilter(&slots).unwrap();
        assert!(re.is_match("AT").unwrap());
        assert!(!re.is_match("CAT").unwrap());
        assert!(!re.is_match("ATS").unwrap());
    }

    #[test]
    fn test_get_regex_caches() {
        let a = get_regex("^CACHED.TEST$").unwrap();
        let b = get_regex("^CACHED.TEST$").unwrap();
        // same compiled pattern either way; both must behave identically
        assert_eq!(a.as_str(), b.as_str());
        assert!(a.is_match("CACHEDXTEST").unwrap());
        assert!(b.is_match("CACHEDXTEST").unwrap());
    }
}
