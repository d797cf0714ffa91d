//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Files are plain text with words separated by any whitespace.

use crate::core::RootWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load every whitespace-separated token from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_tokens_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let tokens: Vec<String> = content.split_whitespace().map(str::to_string).collect();
    debug!(path = %path.display(), tokens = tokens.len(), "Loaded word list");

    Ok(tokens)
}

/// Load root words from a file
///
/// Returns a vector of valid `RootWord` instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_root_words_from_file;
///
/// let words = load_root_words_from_file("data/roots.txt").unwrap();
/// println!("Loaded {} root words", words.len());
/// ```
pub fn load_root_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<RootWord>> {
    let tokens = load_tokens_from_file(path)?;
    Ok(root_words_from_slice(&tokens))
}

/// Convert a string slice to root words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::root_words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = root_words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn root_words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<RootWord> {
    slice
        .iter()
        .filter_map(|s| match RootWord::new(s.as_ref()) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!(entry = s.as_ref(), %err, "Skipping root word entry");
                None
            }
        })
        .collect()
}
