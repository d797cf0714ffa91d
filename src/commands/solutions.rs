//! Enumerate every word a root word allows
//!
//! Runs the whole dictionary through the checks a fresh game applies.

use crate::core::RootWord;
use crate::dictionary::WordListDictionary;
use crate::validation::{classify, score};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// All words that would be accepted in a fresh game with this root word
#[derive(Debug, Clone)]
pub struct SolutionsResult {
    pub root: String,
    /// Highest score first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word
    pub max_score: usize,
    pub duration: Duration,
}

impl SolutionsResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of solutions not yet in `found`
    #[must_use]
    pub fn remaining<'a, I>(&self, found: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found: Vec<&str> = found.into_iter().collect();
        self.words
            .iter()
            .filter(|w| !found.contains(&w.as_str()))
            .count()
    }
}

/// Find every dictionary word the root word can produce
#[must_use]
pub fn find_solutions(root: &RootWord, dictionary: &WordListDictionary) -> SolutionsResult {
    let start = Instant::now();
    let none: [&str; 0] = [];

    let mut words: Vec<String> = dictionary
        .word_set()
        .par_iter()
        .filter(|word| classify(word, root, none, dictionary, dictionary.language()).is_ok())
        .cloned()
        .collect();

    words.sort_by(|a, b| score(b).cmp(&score(a)).then_with(|| a.cmp(b)));
    let max_score = words.iter().map(|w| score(w)).sum();

    SolutionsResult {
        root: root.text().to_string(),
        words,
        max_score,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            Language::ENGLISH,
            ["listen", "silent", "lines", "net", "tin", "sisters", "at", "tile", "zebra"],
        )
    }

    #[test]
    fn finds_spellable_dictionary_words() {
        let root = RootWord::new("listen").unwrap();
        let result = find_solutions(&root, &dictionary());

        assert_eq!(result.root, "listen");
        assert_eq!(result.words, vec!["silent", "lines", "tile", "net", "tin"]);
        assert_eq!(result.word_count(), 5);
        assert_eq!(result.max_score, 6 + 5 + 4 + 3 + 3);
    }

    #[test]
    fn excludes_root_word_and_short_words() {
        let root = RootWord::new("listen").unwrap();
        let result = find_solutions(&root, &dictionary());

        assert!(!result.words.contains(&"listen".to_string()));
        assert!(!result.words.contains(&"at".to_string()));
    }

    #[test]
    fn remaining_ignores_found_words() {
        let root = RootWord::new("listen").unwrap();
        let result = find_solutions(&root, &dictionary());

        assert_eq!(result.remaining(["net", "silent", "unrelated"]), 3);
        assert_eq!(result.remaining(std::iter::empty()), 5);
    }

    #[test]
    fn no_solutions_for_unrelated_root() {
        let root = RootWord::new("qqq").unwrap();
        let result = find_solutions(&root, &dictionary());
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
    }
}
