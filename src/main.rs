use std::error::Error;
use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;

use hangman::cli::{Cli, CliIo, parse_cli};
use hangman::wordset::{self, Selection};
use hangman::{logging, run_session, tui};

fn main() {
    logging::init();
    let cli = parse_cli();
    if let Err(err) = run(&cli) {
        log::error!("fatal: {err}");
        println!("The program has crashed. Sorry!");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let words = match &cli.wordlist_path {
        Some(path) => wordset::load_words_from_file(path)?,
        None => {
            let countries = wordset::load_embedded_countries()?;
            let selection = match &cli.region {
                Some(region) => Some(Selection::from_flags(region, cli.subregion.as_deref())),
                None => tui::pick_selection(&countries)?,
            };
            let Some(selection) = selection else {
                // Player backed out of the picker.
                return Ok(());
            };
            wordset::words_for(&countries, &selection)?
        }
    };
    log::info!("starting session with {} words", words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stdin = io::stdin();
    let mut game_io = CliIo::new(stdin.lock());
    run_session(words, &mut game_io, &mut rng);
    Ok(())
}
