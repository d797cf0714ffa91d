//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading, and the
//! root word source a session draws from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use source::{RootWordSource, WordListSource};
