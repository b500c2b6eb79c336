use std::io;
use thiserror::Error;

/// Reasons a word drawn from the pool cannot start a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("word must contain at least one letter (a-z)")]
    NoLetters,

    #[error("word must not contain the placeholder character '{0}'")]
    ContainsPlaceholder(char),

    #[error("word must not contain whitespace")]
    ContainsWhitespace,
}

/// Reasons a submitted guess is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    /// The input was not exactly one letter (a-z, either case).
    #[error("guess must be a single letter (a-z), got {0:?}")]
    NotALetter(String),

    /// The round already reached a terminal state. The session loop must
    /// stop submitting guesses once a round is won or lost, so hitting this
    /// is caller misuse rather than a user-facing condition.
    #[error("no guesses remaining")]
    RoundOver,
}

/// Failures while loading the word dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read word file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed country dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("the selected category contains no words")]
    EmptySelection,
}
