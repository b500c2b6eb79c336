//! Round engine: the guessing state for a single secret word.
//!
//! A `Round` owns the word, the set of letters guessed so far, and the
//! remaining budget of incorrect guesses. It performs no I/O; the session
//! loop feeds it one guess at a time and renders whatever it reports back.

use std::collections::HashSet;

use crate::errors::{GuessError, WordError};

/// Shown in place of every alphabetic position that has not been guessed.
pub const PLACEHOLDER: char = '_';

/// Incorrect guesses allowed per round.
pub const MAX_GUESSES: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Ongoing,
    Won,
    Lost,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::Ongoing)
    }
}

/// Result of evaluating one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The letter occurs somewhere in the word.
    pub hit: bool,
    /// The letter had already been guessed; nothing changed.
    pub repeat: bool,
    /// Incorrect guesses still available.
    pub remaining: u8,
    pub state: RoundState,
}

#[derive(Debug, Clone)]
pub struct Round {
    source: String,
    guessed: HashSet<char>,
    remaining: u8,
}

impl Round {
    /// Starts a round over `word` with a full guess budget.
    ///
    /// The word must contain at least one ASCII letter, must not contain the
    /// placeholder character, and must not contain whitespace of any kind.
    pub fn new(word: &str) -> Result<Self, WordError> {
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NoLetters);
        }
        if word.contains(PLACEHOLDER) {
            return Err(WordError::ContainsPlaceholder(PLACEHOLDER));
        }
        if word.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }
        Ok(Self {
            source: word.to_string(),
            guessed: HashSet::new(),
            remaining: MAX_GUESSES,
        })
    }

    /// The word with unguessed letters masked. Non-alphabetic characters and
    /// guessed letters keep their original casing.
    pub fn masked(&self) -> String {
        self.source
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() && !self.guessed.contains(&c.to_ascii_lowercase()) {
                    PLACEHOLDER
                } else {
                    c
                }
            })
            .collect()
    }

    /// The original word, regardless of guesses made.
    pub fn revealed(&self) -> &str {
        &self.source
    }

    pub fn guesses_left(&self) -> u8 {
        self.remaining
    }

    pub fn is_won(&self) -> bool {
        self.source
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| self.guessed.contains(&c.to_ascii_lowercase()))
    }

    pub fn state(&self) -> RoundState {
        if self.is_won() {
            RoundState::Won
        } else if self.remaining == 0 {
            RoundState::Lost
        } else {
            RoundState::Ongoing
        }
    }

    /// Evaluates one guess.
    ///
    /// `input` must be exactly one letter (a-z, either case); that check
    /// happens before the budget check, so malformed input never costs a
    /// guess. Matching is case-insensitive against the whole word, so a hit
    /// reveals every occurrence of the letter at once. A letter submitted
    /// twice is reported as a repeat and changes nothing.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(GuessError::NotALetter(input.to_string())),
        };

        if self.state().is_terminal() {
            return Err(GuessError::RoundOver);
        }

        let hit = self.source.to_lowercase().contains(letter);
        let repeat = !self.guessed.insert(letter);
        if !hit && !repeat {
            self.remaining = self.remaining.saturating_sub(1);
        }
        log::debug!(
            "guess {letter:?}: hit={hit} repeat={repeat} remaining={}",
            self.remaining
        );

        Ok(GuessOutcome {
            hit,
            repeat,
            remaining: self.remaining,
            state: self.state(),
        })
    }
}
