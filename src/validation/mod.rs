//! Candidate validation and scoring
//!
//! Pure classification of a candidate against the root word, the words already used,
//! and a dictionary. No session state lives here.

mod outcome;
mod rules;

pub use outcome::{Alert, Rejection, SubmissionOutcome};
pub use rules::{
    MIN_WORD_LENGTH, classify, is_long_enough, is_original, is_possible, is_real, is_root_word,
    score,
};
