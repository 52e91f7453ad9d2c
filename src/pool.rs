//! Character pool construction
//!
//! Turns a class/filter selection into a deduplicated, sorted character pool
//! plus the list of classes that contributed to it. All downstream sampling
//! indexes into the sorted pool, so construction is fully deterministic.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::PoolError;

/// Lowercase base set (a-z)
const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase base set (A-Z)
const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digit base set (0-9)
const DIGIT_CHARS: &str = "0123456789";

/// Symbols base set: the 32 ASCII punctuation characters
const SYMBOL_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The 64 unreserved URL characters (RFC 3986)
const URL_SAFE_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Look-alike glyphs removed by the no-ambiguous filter
const AMBIGUOUS_CHARS: &str = "O0oIl1|`'\"{}[]()/\\;:,.<>";

/// Whitespace is never allowed in a pool, regardless of selection
const WHITESPACE_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// A named character category that can contribute to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digits,
    Symbols,
    /// Sentinel for the fixed URL-safe pool; never mixed with the others
    UrlSafe,
}

impl CharacterClass {
    /// The four standard classes, in selection order
    pub const STANDARD: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Class name as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
            CharacterClass::UrlSafe => "url_safe",
        }
    }

    /// Base character set used for pool membership checks.
    ///
    /// For `Symbols` this is always ASCII punctuation, even when the pool was
    /// built from a caller-supplied override set.
    fn base_set(&self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWER_CHARS,
            CharacterClass::Upper => UPPER_CHARS,
            CharacterClass::Digits => DIGIT_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
            CharacterClass::UrlSafe => URL_SAFE_CHARS,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Class selection and filter options for pool construction
///
/// When none of the four class flags is set and `url_safe` is off, all four
/// classes default to active.
#[derive(Debug, Clone, Default)]
pub struct PoolSelection {
    /// Include lowercase letters (a-z)
    pub lower: bool,
    /// Include uppercase letters (A-Z)
    pub upper: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include symbols
    pub symbols: bool,
    /// Override the symbols set (default: ASCII punctuation)
    pub symbols_set: Option<String>,
    /// Characters to remove from the pool
    pub exclude: String,
    /// Remove ambiguous look-alikes like O/0/I/l/1
    pub no_ambiguous: bool,
    /// Use the fixed URL-safe unreserved set; ignores the class flags
    pub url_safe: bool,
}

/// The deduplicated set of allowed characters for the random portion
///
/// Held as a sorted sequence so that index-based sampling is deterministic
/// with respect to construction. Never empty, never contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Number of distinct characters in the pool
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the pool has no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Membership test
    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// The pool as a sorted slice of unique characters
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Build the character pool and the list of active classes for a selection.
///
/// URL-safe mode fixes the pool to the 64 unreserved URL characters and
/// reports the single `url_safe` sentinel class. Otherwise the explicitly
/// selected classes contribute (all four when none is set), symbols coming
/// from the override set when one is supplied. Filters are applied in order:
/// ambiguous removal (skipped for url-safe), caller exclusions, and an
/// unconditional whitespace strip.
///
/// # Errors
/// * `PoolError::EmptySelection` if no class contributed
/// * `PoolError::EmptyPool` if the filters removed every character
///
/// # Example
/// ```
/// use spgcore::{build_pool, PoolSelection};
///
/// let selection = PoolSelection {
///     lower: true,
///     digits: true,
///     ..Default::default()
/// };
/// let (pool, classes) = build_pool(&selection).unwrap();
/// assert_eq!(pool.len(), 36);
/// assert_eq!(classes.len(), 2);
/// ```
pub fn build_pool(
    selection: &PoolSelection,
) -> Result<(CharacterPool, Vec<CharacterClass>), PoolError> {
    let mut parts: Vec<String> = Vec::new();
    let mut classes: Vec<CharacterClass> = Vec::new();

    if selection.url_safe {
        parts.push(URL_SAFE_CHARS.to_string());
        classes.push(CharacterClass::UrlSafe);
    } else {
        let any_specified =
            selection.lower || selection.upper || selection.digits || selection.symbols;

        for class in CharacterClass::STANDARD {
            let selected = if any_specified {
                match class {
                    CharacterClass::Lower => selection.lower,
                    CharacterClass::Upper => selection.upper,
                    CharacterClass::Digits => selection.digits,
                    CharacterClass::Symbols => selection.symbols,
                    CharacterClass::UrlSafe => false,
                }
            } else {
                true
            };
            if !selected {
                continue;
            }
            let chars = match class {
                CharacterClass::Symbols => selection
                    .symbols_set
                    .clone()
                    .unwrap_or_else(|| SYMBOL_CHARS.to_string()),
                _ => class.base_set().to_string(),
            };
            parts.push(chars);
            classes.push(class);
        }
    }

    if classes.is_empty() {
        return Err(PoolError::EmptySelection);
    }

    // BTreeSet gives dedup and sorted order in one pass
    let mut pool: BTreeSet<char> = parts.iter().flat_map(|s| s.chars()).collect();

    if selection.no_ambiguous && !selection.url_safe {
        pool.retain(|c| !AMBIGUOUS_CHARS.contains(*c));
    }

    for c in selection.exclude.chars() {
        pool.remove(&c);
    }

    for c in WHITESPACE_CHARS {
        pool.remove(&c);
    }

    if pool.is_empty() {
        return Err(PoolError::EmptyPool);
    }

    Ok((CharacterPool::new(pool.into_iter().collect()), classes))
}

/// For each standard class, the characters of the final pool belonging to it.
///
/// Returned in selection order (lower, upper, digits, symbols). Used by
/// validation and mandatory-character seeding on the non-url-safe path.
pub fn class_membership(pool: &CharacterPool) -> Vec<(CharacterClass, Vec<char>)> {
    CharacterClass::STANDARD
        .iter()
        .map(|&class| {
            let members: Vec<char> = pool
                .chars()
                .iter()
                .copied()
                .filter(|&c| class.base_set().contains(c))
                .collect();
            (class, members)
        })
        .collect()
}
