//! Letter multiset used for spellability checks

use rustc_hash::FxHashMap;

/// The letters of a word, counted with multiplicity
///
/// Spelling a candidate consumes one occurrence per letter, so a root word with a
/// single `s` can never spell a word that needs two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Count the letters of `text`
    #[must_use]
    pub fn from_word(text: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// How many occurrences of `letter` remain
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters remaining
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Works on a scratch copy: each character of the candidate takes one matching
    /// letter, and the first character without a match fails the check. The empty
    /// string is always spellable.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut working = self.clone();
        candidate.chars().all(|ch| working.take(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let pool = LetterPool::from_word("letter");
        assert_eq!(pool.count_of('t'), 2);
        assert_eq!(pool.count_of('e'), 2);
        assert_eq!(pool.count_of('l'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::from_word("moon");
        assert!(pool.take('o'));
        assert!(pool.take('o'));
        assert!(!pool.take('o'));
        assert_eq!(pool.count_of('o'), 0);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn can_spell_subsets() {
        let pool = LetterPool::from_word("listen");
        assert!(pool.can_spell("lines"));
        assert!(pool.can_spell("silent"));
        assert!(pool.can_spell("net"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::from_word("listen");
        assert!(!pool.can_spell("sisters"));
        assert!(!pool.can_spell("teen"));
    }

    #[test]
    fn can_spell_does_not_mutate() {
        let pool = LetterPool::from_word("cat");
        assert!(pool.can_spell("act"));
        assert!(pool.can_spell("act"));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn empty_candidate_is_spellable() {
        assert!(LetterPool::from_word("cat").can_spell(""));
        assert!(LetterPool::default().can_spell(""));
        assert!(LetterPool::default().is_empty());
    }

    #[test]
    fn case_sensitive() {
        let pool = LetterPool::from_word("cat");
        assert!(!pool.can_spell("CAT"));
    }
}
