//! Survey the root word corpus
//!
//! Computes how many words each root word allows, to spot roots that make for
//! thin or rich games.

use super::solutions::find_solutions;
use crate::core::RootWord;
use crate::dictionary::WordListDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Solution statistics for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyEntry {
    pub root: String,
    pub word_count: usize,
    pub max_score: usize,
}

/// Statistics across the whole corpus
#[derive(Debug)]
pub struct SurveyResult {
    /// Most solutions first
    pub entries: Vec<SurveyEntry>,
    pub total_time: Duration,
    pub average_words: f64,
}

impl SurveyResult {
    /// Root words that allow no word at all
    pub fn barren(&self) -> impl Iterator<Item = &SurveyEntry> {
        self.entries.iter().filter(|e| e.word_count == 0)
    }
}

/// Find the solutions of every root word
///
/// Shows a progress bar on stderr when `show_progress` is set.
#[must_use]
pub fn run_survey(
    roots: &[RootWord],
    dictionary: &WordListDictionary,
    show_progress: bool,
) -> SurveyResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut entries: Vec<SurveyEntry> = roots
        .iter()
        .map(|root| {
            pb.set_message(root.text().to_string());
            let solutions = find_solutions(root, dictionary);
            pb.inc(1);
            SurveyEntry {
                root: solutions.root,
                word_count: solutions.words.len(),
                max_score: solutions.max_score,
            }
        })
        .collect();
    pb.finish_and_clear();

    entries.sort_by(|a, b| {
        b.word_count
            .cmp(&a.word_count)
            .then_with(|| b.max_score.cmp(&a.max_score))
            .then_with(|| a.root.cmp(&b.root))
    });

    let average_words = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| e.word_count).sum::<usize>() as f64 / entries.len() as f64
    };

    let total_time = start.elapsed();
    info!(roots = entries.len(), ?total_time, "Survey finished");

    SurveyResult {
        entries,
        total_time,
        average_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;
    use crate::wordlists::loader::root_words_from_slice;

    #[test]
    fn ranks_roots_by_word_count() {
        let dictionary = WordListDictionary::new(
            Language::ENGLISH,
            ["net", "tin", "lines", "silent", "cat", "act"],
        );
        let roots = root_words_from_slice(&["cats", "listen", "zzz"]);

        let result = run_survey(&roots, &dictionary, false);

        let order: Vec<&str> = result.entries.iter().map(|e| e.root.as_str()).collect();
        assert_eq!(order, vec!["listen", "cats", "zzz"]);
        assert_eq!(result.entries[0].word_count, 4);
        assert_eq!(result.entries[1].max_score, 6);
        assert!((result.average_words - 2.0).abs() < f64::EPSILON);
        assert_eq!(result.barren().count(), 1);
    }

    #[test]
    fn empty_corpus() {
        let dictionary = WordListDictionary::new(Language::ENGLISH, ["cat"]);
        let result = run_survey(&[], &dictionary, false);
        assert!(result.entries.is_empty());
        assert!(result.average_words.abs() < f64::EPSILON);
    }
}
