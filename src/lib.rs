// Library interface for hangman
// This allows integration tests to drive full sessions over scripted input

pub mod cli;
pub mod errors;
pub mod logging;
pub mod round;
pub mod session;
pub mod tui;
pub mod wordset;

// Re-export the core types for easier testing
pub use errors::{DataError, GuessError, WordError};
pub use round::{GuessOutcome, MAX_GUESSES, PLACEHOLDER, Round, RoundState};
pub use session::{GameIo, PlayerInput, run_session};
pub use wordset::{Selection, load_embedded_countries, load_words_from_file, words_for};
