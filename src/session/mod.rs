//! Game session state
//!
//! A `GameSession` owns one play-through at a time: the root word, the accepted words
//! (most recent first) and the score. Restarting replaces all three at once.

use crate::core::{RootWord, normalize};
use crate::dictionary::{DictionaryOracle, Language};
use crate::validation::{self, SubmissionOutcome};
use crate::wordlists::RootWordSource;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop a game from starting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Root word source has no usable words")]
    RootWordSourceExhausted,
}

/// One game of word building
///
/// Constructing a session already draws the first root word, so there is no way to
/// submit a word before a game exists.
pub struct GameSession<S: RootWordSource, D: DictionaryOracle> {
    source: S,
    oracle: D,
    language: Language,
    rng: StdRng,
    root_word: RootWord,
    used_words: VecDeque<String>,
    score: usize,
}

impl<S: RootWordSource, D: DictionaryOracle> GameSession<S, D> {
    /// Start a session with an OS-seeded random root word
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RootWordSourceExhausted` if the source has no words.
    pub fn new(source: S, oracle: D) -> Result<Self, SessionError> {
        Self::with_rng(source, oracle, StdRng::from_os_rng())
    }

    /// Start a session whose root word draws are reproducible
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RootWordSourceExhausted` if the source has no words.
    pub fn with_seed(source: S, oracle: D, seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(source, oracle, StdRng::seed_from_u64(seed))
    }

    /// Start a session drawing root words with the given generator
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RootWordSourceExhausted` if the source has no words.
    pub fn with_rng(source: S, oracle: D, mut rng: StdRng) -> Result<Self, SessionError> {
        let root_word = draw_root_word(&source, &mut rng)?;
        info!(root_word = %root_word, "Game started");

        Ok(Self {
            source,
            oracle,
            language: Language::ENGLISH,
            rng,
            root_word,
            used_words: VecDeque::new(),
            score: 0,
        })
    }

    /// Check spelling in another language than English
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Draw a new root word and clear the history and score
    ///
    /// On error the current game is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::RootWordSourceExhausted` if the source has no words.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let root_word = draw_root_word(&self.source, &mut self.rng)?;
        info!(root_word = %root_word, previous_score = self.score, "Game restarted");

        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
        Ok(())
    }

    /// Evaluate one player submission
    ///
    /// Input is lowercased and trimmed first. Rejections leave the session untouched;
    /// an accepted word goes to the front of the history and its length is added to
    /// the score.
    pub fn submit(&mut self, raw_input: &str) -> SubmissionOutcome {
        let candidate = normalize(raw_input);

        if let Err(rejection) = validation::classify(
            &candidate,
            &self.root_word,
            &self.used_words,
            &self.oracle,
            self.language,
        ) {
            debug!(candidate = %candidate, ?rejection, "Word rejected");
            return SubmissionOutcome::Rejected(rejection);
        }

        let points = validation::score(&candidate);
        self.score += points;
        self.used_words.push_front(candidate.clone());
        info!(word = %candidate, points, score = self.score, "Word accepted");

        SubmissionOutcome::Accepted(candidate)
    }

    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.used_words.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}

fn draw_root_word<S: RootWordSource>(
    source: &S,
    rng: &mut StdRng,
) -> Result<RootWord, SessionError> {
    source
        .all_root_words()
        .choose(rng)
        .cloned()
        .ok_or(SessionError::RootWordSourceExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::validation::Rejection;
    use crate::wordlists::WordListSource;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            Language::ENGLISH,
            ["lines", "silent", "net", "nets", "tin", "listen", "tile"],
        )
    }

    fn session() -> GameSession<WordListSource, WordListDictionary> {
        GameSession::with_seed(WordListSource::from_words(&["listen"]), dictionary(), 7).unwrap()
    }

    #[test]
    fn new_session_starts_fresh() {
        let game = session();
        assert_eq!(game.root_word().text(), "listen");
        assert_eq!(game.used_words().len(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.language(), Language::ENGLISH);
    }

    #[test]
    fn empty_source_fails_to_start() {
        let result = GameSession::new(WordListSource::default(), dictionary());
        assert!(matches!(result, Err(SessionError::RootWordSourceExhausted)));
    }

    #[test]
    fn accepted_word_updates_state() {
        let mut game = session();
        let outcome = game.submit("lines");

        assert_eq!(outcome, SubmissionOutcome::Accepted("lines".to_string()));
        assert_eq!(game.score(), 5);
        assert_eq!(game.used_words().collect::<Vec<_>>(), vec!["lines"]);
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut game = session();
        assert!(game.submit("net").is_accepted());
        assert!(game.submit("tile").is_accepted());
        assert!(game.submit("silent").is_accepted());

        assert_eq!(
            game.used_words().collect::<Vec<_>>(),
            vec!["silent", "tile", "net"]
        );
        assert_eq!(game.score(), 3 + 4 + 6);
    }

    #[test]
    fn input_is_normalized_before_checks() {
        let mut game = session();
        assert_eq!(
            game.submit("  LiNeS \n"),
            SubmissionOutcome::Accepted("lines".to_string())
        );
        assert_eq!(
            game.submit("LINES"),
            SubmissionOutcome::Rejected(Rejection::NotOriginal)
        );
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut game = session();
        assert!(game.submit("net").is_accepted());

        for input in ["ab", "listen", "net", "sisters", "lets"] {
            assert!(!game.submit(input).is_accepted(), "'{input}' was accepted");
        }

        assert_eq!(game.score(), 3);
        assert_eq!(game.used_words().collect::<Vec<_>>(), vec!["net"]);
    }

    #[test]
    fn rejection_reasons_follow_check_order() {
        let mut game = session();
        assert!(game.submit("net").is_accepted());

        assert_eq!(game.submit("ab").rejection(), Some(Rejection::TooShort));
        assert_eq!(game.submit("  ab  ").rejection(), Some(Rejection::TooShort));
        assert_eq!(game.submit("Listen").rejection(), Some(Rejection::IsRootWord));
        assert_eq!(game.submit("net").rejection(), Some(Rejection::NotOriginal));
        assert_eq!(game.submit("sisters").rejection(), Some(Rejection::NotPossible));
        assert_eq!(game.submit("lets").rejection(), Some(Rejection::NotReal));
    }

    #[test]
    fn restart_resets_history_and_score() {
        let mut game = session();
        assert!(game.submit("lines").is_accepted());
        assert!(game.submit("net").is_accepted());

        game.restart().unwrap();

        assert_eq!(game.used_words().len(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.root_word().text(), "listen");

        // Previously used words are fresh again
        assert!(game.submit("lines").is_accepted());
    }

    #[test]
    fn restart_draws_from_source() {
        let roots = ["listen", "scramble", "rainbows", "notebook"];
        let mut game =
            GameSession::with_seed(WordListSource::from_words(&roots), dictionary(), 42).unwrap();

        for _ in 0..20 {
            game.restart().unwrap();
            assert!(roots.contains(&game.root_word().text()));
        }
    }

    #[test]
    fn same_seed_same_root_words() {
        let roots = ["listen", "scramble", "rainbows", "notebook", "umbrella"];
        let mut first =
            GameSession::with_seed(WordListSource::from_words(&roots), dictionary(), 99).unwrap();
        let mut second =
            GameSession::with_seed(WordListSource::from_words(&roots), dictionary(), 99).unwrap();

        for _ in 0..10 {
            assert_eq!(first.root_word(), second.root_word());
            first.restart().unwrap();
            second.restart().unwrap();
        }
    }

    #[test]
    fn other_language_rejects_english_words() {
        let mut game = session().with_language(Language::new("fr"));
        assert_eq!(game.submit("lines").rejection(), Some(Rejection::NotReal));
    }
}
