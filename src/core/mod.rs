//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no knowledge of dictionaries,
//! sessions or rendering. All types here are pure and cheap to test.

mod letters;
mod word;

pub use letters::LetterPool;
pub use word::{RootWord, WordError, normalize};
