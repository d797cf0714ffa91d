//! Submission outcomes and rejection reasons

use std::fmt;
use thiserror::Error;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("word is shorter than three letters")]
    TooShort,
    #[error("word is the root word")]
    IsRootWord,
    #[error("word was already used")]
    NotOriginal,
    #[error("word cannot be spelled from the root word")]
    NotPossible,
    #[error("word is not in the dictionary")]
    NotReal,
}

/// Title and message shown to the player for a rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl Rejection {
    /// Alert to show the player, given the current root word
    ///
    /// Too-short input is dropped silently, so it has no alert.
    #[must_use]
    pub fn alert(self, root_word: &str) -> Option<Alert> {
        let (title, message) = match self {
            Self::TooShort => return None,
            Self::IsRootWord => ("Word not possible", "You can't spell root word".to_string()),
            Self::NotOriginal => ("Word used already", "Be more original".to_string()),
            Self::NotPossible => (
                "Word not possible",
                format!("You can't spell that word from '{root_word}'!"),
            ),
            Self::NotReal => (
                "Word not recognized",
                "You can't just make them up, you know!".to_string(),
            ),
        };
        Some(Alert { title, message })
    }

    /// Whether the player should be told about this rejection
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::TooShort)
    }
}

/// Result of submitting one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The normalized word was added to the history
    Accepted(String),
    Rejected(Rejection),
}

impl SubmissionOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(word) => write!(f, "accepted '{word}'"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}
