//! Candidate predicates and scoring
//!
//! Every function here is pure: inputs come in explicitly and nothing is mutated.
//! Candidates are expected to be normalized already (see `core::normalize`).

use super::Rejection;
use crate::core::RootWord;
use crate::dictionary::{DictionaryOracle, Language};

/// Shortest candidate that is evaluated at all
pub const MIN_WORD_LENGTH: usize = 3;

/// Check the candidate has at least `MIN_WORD_LENGTH` characters
#[inline]
#[must_use]
pub fn is_long_enough(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_WORD_LENGTH
}

/// Check whether the candidate is the root word itself
#[inline]
#[must_use]
pub fn is_root_word(candidate: &str, root_word: &str) -> bool {
    candidate == root_word
}

/// Check the candidate has not been accepted before
#[must_use]
pub fn is_original<I, S>(candidate: &str, used_words: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    !used_words.into_iter().any(|used| used.as_ref() == candidate)
}

/// Check the candidate can be spelled from the root word's letters
///
/// Each letter of the root word may be used once per occurrence.
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::validation::is_possible;
///
/// let root = RootWord::new("listen").unwrap();
/// assert!(is_possible("lines", &root));
/// assert!(!is_possible("sisters", &root));
/// ```
#[inline]
#[must_use]
pub fn is_possible(candidate: &str, root_word: &RootWord) -> bool {
    root_word.letters().can_spell(candidate)
}

/// Ask the dictionary whether the candidate is a real word
#[inline]
#[must_use]
pub fn is_real<D: DictionaryOracle + ?Sized>(
    candidate: &str,
    oracle: &D,
    language: Language,
) -> bool {
    oracle.check_spelling(candidate, language)
}

/// Points awarded for an accepted word: one per character
#[inline]
#[must_use]
pub fn score(candidate: &str) -> usize {
    candidate.chars().count()
}

/// Run every check in order and report the first one that fails
///
/// The order is part of the game's contract: length, root word, originality,
/// spellability, then the dictionary. The dictionary is only consulted once every
/// cheaper check has passed.
///
/// # Errors
///
/// Returns the `Rejection` of the first failing check.
pub fn classify<I, S, D>(
    candidate: &str,
    root_word: &RootWord,
    used_words: I,
    oracle: &D,
    language: Language,
) -> Result<(), Rejection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    D: DictionaryOracle + ?Sized,
{
    if !is_long_enough(candidate) {
        return Err(Rejection::TooShort);
    }
    if is_root_word(candidate, root_word.text()) {
        return Err(Rejection::IsRootWord);
    }
    if !is_original(candidate, used_words) {
        return Err(Rejection::NotOriginal);
    }
    if !is_possible(candidate, root_word) {
        return Err(Rejection::NotPossible);
    }
    if !is_real(candidate, oracle, language) {
        return Err(Rejection::NotReal);
    }
    Ok(())
}
