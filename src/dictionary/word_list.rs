//! Dictionary backed by a plain word list

use super::{DictionaryOracle, Language};
use crate::wordlists::{DICTIONARY, loader::load_tokens_from_file};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// A set of known words for a single language
///
/// Entries are lowercased and trimmed on the way in; empty entries are dropped.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, Language, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new(Language::ENGLISH, ["cat", "Dog"]);
    /// assert!(dictionary.check_spelling("dog", Language::ENGLISH));
    /// assert!(!dictionary.check_spelling("cow", Language::ENGLISH));
    /// ```
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Language::ENGLISH, DICTIONARY)
    }

    /// Load an English dictionary from a whitespace-separated word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let tokens = load_tokens_from_file(path)?;
        Ok(Self::new(Language::ENGLISH, tokens))
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Exact membership test, ignoring the acceptance rules of `check_spelling`
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) const fn word_set(&self) -> &FxHashSet<String> {
        &self.words
    }
}

impl DictionaryOracle for WordListDictionary {
    fn check_spelling(&self, text: &str, language: Language) -> bool {
        if language != self.language {
            return false;
        }

        // Single letters and phrases never count as words
        if text.chars().count() < 2 || text.chars().any(char::is_whitespace) {
            return false;
        }

        self.words.contains(text)
    }
}
