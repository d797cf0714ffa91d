//! Word Scramble
//!
//! A word building game: a random root word is drawn, and the player scores one
//! point per letter for every real word they can spell from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::GameSession;
//! use word_scramble::wordlists::WordListSource;
//!
//! let source = WordListSource::from_words(&["listen"]);
//! let dictionary = WordListDictionary::embedded();
//! let mut game = GameSession::new(source, &dictionary).unwrap();
//!
//! assert!(game.submit("Lines").is_accepted());
//! assert_eq!(game.score(), 5);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle and word list dictionary
pub mod dictionary;

// Candidate checks and scoring
pub mod validation;

// Game session state
pub mod session;

// Word lists and root word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
