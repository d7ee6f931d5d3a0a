//! Word Game - draw a hand of letters, spell words, win rounds.
//!
//! First player to win a majority of rounds takes the match.

mod app;
mod config;
mod console;
mod error;
mod game;
mod logging;

use app::App;
use clap::Parser;
use config::Config;
use console::Console;
use error::GameError;
use game::{Dictionary, RandomDealer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    let _logger = logging::setup_logging(&config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::InputClosed) => {
            log::info!("input closed, ending session");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wordgame: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> error::Result<()> {
    let dictionary = Dictionary::load(&config.dictionary_path())?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    log::debug!("hand size {}, seed {:?}", config.hand_size, config.seed);

    let console = Console::new(io::stdin().lock(), io::stdout(), !config.no_color);
    let mut app = App::new(dictionary, RandomDealer::new(rng), console, config.hand_size);
    app.run()
}
