//! Dictionary oracle capability

use std::fmt;

/// Language tag a dictionary answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static str);

impl Language {
    /// English, tag `en`
    pub const ENGLISH: Self = Self("en");

    /// Create a language from its tag
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Something that can judge whether a string is a real word
///
/// Implementations must not accept the empty string, single letters, or text
/// containing whitespace.
pub trait DictionaryOracle {
    /// Returns `true` if `text` has no misspelling anywhere in its span
    fn check_spelling(&self, text: &str, language: Language) -> bool;
}

impl<D: DictionaryOracle + ?Sized> DictionaryOracle for &D {
    fn check_spelling(&self, text: &str, language: Language) -> bool {
        (**self).check_spelling(text, language)
    }
}

impl<D: DictionaryOracle + ?Sized> DictionaryOracle for Box<D> {
    fn check_spelling(&self, text: &str, language: Language) -> bool {
        (**self).check_spelling(text, language)
    }
}
