//! Root word representation
//!
//! A `RootWord` stores a validated corpus word along with its letter pool for
//! spellability checks.

use super::LetterPool;
use std::fmt;
use thiserror::Error;

/// A root word drawn at the start of a game
///
/// Always non-empty, lowercase and made of letters only. The letter pool is computed
/// once so every spellability check can start from a cheap copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letters: LetterPool,
}

/// Error type for corpus entries that cannot be used as root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Root word must not be empty")]
    Empty,
    #[error("Root word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl RootWord {
    /// Create a new root word from a corpus entry
    ///
    /// The entry is lowercased; surrounding or embedded whitespace is not accepted.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The entry is empty
    /// - It contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let word = RootWord::new("Listen").unwrap();
    /// assert_eq!(word.text(), "listen");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = LetterPool::from_word(&text);
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters available for spelling
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Number of characters in the word
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalize raw player input into a candidate word
///
/// Lowercases and trims leading and trailing whitespace. Inner whitespace is kept, so
/// such input later fails the spellability check.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Cat\n"), "cat");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
