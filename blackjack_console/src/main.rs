mod app;
mod console;
mod render;

use app::App;
use blackjack_lib::prelude::*;
use clap::{Parser, Subcommand};
use console::ConsoleIo;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blackjack", about = "Multi-player blackjack against the dealer, with tournaments")]
struct Cli {
    /// JSON configuration file, missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for shuffling, a random seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Score log file, overrides the configuration
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Number of tournament rounds, skips the rounds prompt
    #[arg(long)]
    rounds: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play one round
    Single,
    /// Play a tournament and rank the players
    Tournament,
    /// Print the score history
    Scores {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(cli: &Cli) -> Result<GameConfig, BlackjackGameError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(path) = &cli.log_file {
        config.score_log_path = path.clone();
    }
    if let Some(rounds) = cli.rounds {
        config.tournament_rounds = rounds;
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("starting with {:?}", config);

    let stdin = io::stdin();
    let mut console = ConsoleIo::new(stdin.lock(), io::stdout());
    let mut app = App::new(config, cli.seed, cli.rounds);

    let result = match cli.command {
        Some(Command::Single) => app.single_game(&mut console).map(|_| ()),
        Some(Command::Tournament) => app.tournament(&mut console).map(|_| ()),
        Some(Command::Scores { json }) => app.show_scores(&mut console, json),
        None => app.menu(&mut console),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
