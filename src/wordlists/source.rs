//! Root word sources

use super::ROOT_WORDS;
use super::loader::{load_root_words_from_file, root_words_from_slice};
use crate::core::RootWord;
use std::io;
use std::path::Path;

/// Supplies the corpus a new game draws its root word from
pub trait RootWordSource {
    /// Every usable root word; an empty slice means no game can start
    fn all_root_words(&self) -> &[RootWord];
}

impl<S: RootWordSource + ?Sized> RootWordSource for &S {
    fn all_root_words(&self) -> &[RootWord] {
        (**self).all_root_words()
    }
}

/// Root word source backed by an in-memory list
#[derive(Debug, Clone, Default)]
pub struct WordListSource {
    words: Vec<RootWord>,
}

impl WordListSource {
    #[must_use]
    pub const fn new(words: Vec<RootWord>) -> Self {
        Self { words }
    }

    /// Build from raw corpus entries, skipping any that are not valid root words
    #[must_use]
    pub fn from_words<S: AsRef<str>>(entries: &[S]) -> Self {
        Self::new(root_words_from_slice(entries))
    }

    /// The root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ROOT_WORDS)
    }

    /// Load root words from a whitespace-separated word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_root_words_from_file(path).map(Self::new)
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

impl RootWordSource for WordListSource {
    fn all_root_words(&self) -> &[RootWord] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_is_not_empty() {
        let source = WordListSource::embedded();
        assert!(!source.is_empty());
        assert_eq!(source.len(), ROOT_WORDS.len());
    }

    #[test]
    fn from_words_drops_invalid_entries() {
        let source = WordListSource::from_words(&["listen", "", "no way"]);
        assert_eq!(source.len(), 1);
        assert_eq!(source.all_root_words()[0].text(), "listen");
    }

    #[test]
    fn default_source_is_empty() {
        let source = WordListSource::default();
        assert!(source.all_root_words().is_empty());
    }
}
