//! Session controller: drains a word pool one round at a time.
//!
//! The controller owns no I/O of its own; everything the player sees or
//! types goes through a [`GameIo`] implementation, which keeps the whole
//! loop runnable against scripted input in tests.

use rand::Rng;

use crate::errors::GuessError;
use crate::round::{Round, RoundState};

/// One line of player input, or the end of the input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Line(String),
    Quit,
}

/// The session's view of the terminal (or of a test script).
pub trait GameIo {
    /// Called once per round before the first prompt.
    fn round_started(&mut self, words_left: usize);
    /// Shows the masked word ahead of each prompt.
    fn show_word(&mut self, masked: &str);
    /// Blocks for one line of input. Returns `Quit` when the source is done.
    fn read_guess(&mut self) -> PlayerInput;
    fn invalid_letter(&mut self, input: &str);
    fn repeat_letter(&mut self, input: &str);
    fn hit(&mut self);
    fn miss(&mut self, remaining: u8);
    fn round_won(&mut self);
    fn round_lost(&mut self, answer: &str);
    /// Called when the pool is empty.
    fn session_over(&mut self);
}

enum RoundEnd {
    Finished,
    Quit,
}

/// Plays rounds until the pool is empty or the input source quits.
///
/// Each round consumes one word, chosen uniformly at random. A word that
/// cannot start a round (no letters, placeholder, whitespace) is skipped
/// rather than aborting the session.
pub fn run_session<G: GameIo, R: Rng>(mut words: Vec<String>, io: &mut G, rng: &mut R) {
    while !words.is_empty() {
        let index = rng.gen_range(0..words.len());
        let word = words.remove(index);
        log::debug!("drew {word:?}, {} words left in pool", words.len());

        let mut round = match Round::new(&word) {
            Ok(round) => round,
            Err(err) => {
                log::warn!("skipping unplayable word {word:?}: {err}");
                continue;
            }
        };

        io.round_started(words.len());
        if let RoundEnd::Quit = play_round(&mut round, io) {
            return;
        }
    }
    io.session_over();
}

fn play_round<G: GameIo>(round: &mut Round, io: &mut G) -> RoundEnd {
    loop {
        io.show_word(&round.masked());

        let line = match io.read_guess() {
            PlayerInput::Line(line) => line,
            PlayerInput::Quit => return RoundEnd::Quit,
        };

        let outcome = match round.guess(&line) {
            Ok(outcome) => outcome,
            Err(GuessError::NotALetter(input)) => {
                io.invalid_letter(&input);
                continue;
            }
            Err(GuessError::RoundOver) => {
                // The loop below returns on every terminal state, so the
                // engine should never see a guess after the round ends.
                log::error!("guess submitted after round ended");
                return RoundEnd::Finished;
            }
        };

        if outcome.repeat {
            io.repeat_letter(&line);
            continue;
        }
        if outcome.hit {
            io.hit();
        }

        match outcome.state {
            RoundState::Won => {
                io.round_won();
                return RoundEnd::Finished;
            }
            RoundState::Lost => {
                io.round_lost(round.revealed());
                return RoundEnd::Finished;
            }
            RoundState::Ongoing => {
                if !outcome.hit {
                    io.miss(outcome.remaining);
                }
            }
        }
    }
}
