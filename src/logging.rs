//! Logger setup. Detail goes to the log, never into the game's output.
//!
//! Defaults to `warn` so skipped words are visible; raise with e.g.
//! `RUST_LOG=hangman=debug` to trace guess evaluation and pool draws.

pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
