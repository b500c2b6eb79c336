use crate::session::{GameIo, PlayerInput};
use clap::Parser;
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (skips the country picker)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Region to draw country names from, without the interactive picker
    /// (e.g. "Europe", or "World" for everything)
    #[arg(long)]
    pub region: Option<String>,

    /// Narrow --region down to a subregion
    #[arg(long, requires = "region")]
    pub subregion: Option<String>,

    /// Seed for word selection, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-based implementation of the game interface.
///
/// Reads guesses from any `BufRead` (stdin in production, a `Cursor` in
/// tests) and writes everything the player sees to stdout.
pub struct CliIo<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliIo<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameIo for CliIo<R> {
    fn round_started(&mut self, words_left: usize) {
        println!("{}", "-".repeat(20));
        log::info!("round started, {words_left} words left in pool");
    }

    fn show_word(&mut self, masked: &str) {
        let spaced: Vec<String> = masked.chars().map(String::from).collect();
        println!("\n{}\n", spaced.join(" "));
    }

    fn read_guess(&mut self) -> PlayerInput {
        println!("Guess a letter! (or 'exit' to quit)");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => return PlayerInput::Quit,
            Ok(_) => {}
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            println!("Exiting.");
            return PlayerInput::Quit;
        }
        PlayerInput::Line(input.to_string())
    }

    fn invalid_letter(&mut self, _input: &str) {
        println!("Please enter a single letter (a-z).");
    }

    fn repeat_letter(&mut self, input: &str) {
        println!("You already tried '{input}'.");
    }

    fn hit(&mut self) {
        println!("Success!!");
    }

    fn miss(&mut self, remaining: u8) {
        println!("Incorrect. {remaining} guesses left!");
    }

    fn round_won(&mut self) {
        println!("You won!");
    }

    fn round_lost(&mut self, answer: &str) {
        println!("Game over. 0 guesses left!");
        println!("The word is {answer}");
    }

    fn session_over(&mut self) {
        println!("No more words. Thanks for playing!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_structure() {
        let cli = Cli {
            wordlist_path: Some("/path/to/words.txt".to_string()),
            region: None,
            subregion: None,
            seed: Some(42),
        };
        assert_eq!(cli.wordlist_path.as_deref(), Some("/path/to/words.txt"));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_read_guess_returns_trimmed_line() {
        let mut io = CliIo::new(Cursor::new("  q  \n"));
        assert_eq!(io.read_guess(), PlayerInput::Line("q".to_string()));
    }

    #[test]
    fn test_read_guess_preserves_case_for_the_engine() {
        let mut io = CliIo::new(Cursor::new("Q\n"));
        assert_eq!(io.read_guess(), PlayerInput::Line("Q".to_string()));
    }

    #[test]
    fn test_read_guess_exit_command() {
        let mut io = CliIo::new(Cursor::new("exit\n"));
        assert_eq!(io.read_guess(), PlayerInput::Quit);

        let mut io = CliIo::new(Cursor::new("EXIT\n"));
        assert_eq!(io.read_guess(), PlayerInput::Quit);
    }

    #[test]
    fn test_read_guess_eof_quits() {
        let mut io = CliIo::new(Cursor::new(""));
        assert_eq!(io.read_guess(), PlayerInput::Quit);
    }

    #[test]
    fn test_read_guess_passes_invalid_input_through() {
        // Validation belongs to the round engine, not the reader.
        let mut io = CliIo::new(Cursor::new("abc\n"));
        assert_eq!(io.read_guess(), PlayerInput::Line("abc".to_string()));
    }
}
